#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::NavigationShell;
use ui::core::session::InertiaPage;
use ui::views::{Dashboard, PageHeader, ProfileSummary, SignedOut};
use ui::{
    CurrentUser, Dispatcher, DispatcherHandle, Method, ResolverHandle, RouteResolver, RouteTable,
    Visit,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[redirect("/", || Route::DashboardPage {})]
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/profile")]
    ProfilePage {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; the shell stylesheet is inlined by NavigationShell itself.

const ROUTES_JSON: &str = include_str!("../assets/routes.json");

/// Local stand-in for the server page object.
const PAGE_JSON: &str = include_str!("../assets/page.json");

/// Overrides the embedded page object with a file on disk.
const PAGE_ENV: &str = "PORTICO_PAGE";

#[derive(Debug, Clone, PartialEq)]
struct Session(Option<CurrentUser>);

/// In-process dispatcher: GET and HEAD visits go through the router; a POST to the logout
/// route ends the local session. There is no server behind other methods.
struct DesktopDispatcher {
    nav: Navigator,
    session: Signal<Session>,
    logout_url: Option<String>,
}

impl Dispatcher for DesktopDispatcher {
    fn dispatch(&self, visit: Visit) {
        match visit.method {
            Method::Get | Method::Head => match visit.url.parse::<Route>() {
                Ok(route) => {
                    self.nav.push(route);
                }
                Err(_) => tracing::warn!(url = %visit.url, "no desktop route for url"),
            },
            Method::Post if self.logout_url.as_deref() == Some(visit.url.as_str()) => {
                tracing::info!("signing out local session");
                let mut session = self.session;
                session.set(Session(None));
            }
            method => tracing::warn!(url = %visit.url, %method, "unsupported visit on desktop"),
        }
    }
}

fn load_page() -> Option<CurrentUser> {
    let raw = match std::env::var(PAGE_ENV) {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(%err, %path, "cannot read page object");
                return None;
            }
        },
        Err(_) => PAGE_JSON.to_string(),
    };
    match InertiaPage::from_json(&raw) {
        Ok(page) => page.into_user(),
        Err(err) => {
            tracing::error!(%err, "page object is invalid");
            None
        }
    }
}

fn load_routes() -> RouteTable {
    RouteTable::from_json(ROUTES_JSON).unwrap_or_else(|err| {
        tracing::error!(%err, "embedded route table is invalid");
        RouteTable::default()
    })
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Portico – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let session = use_signal(|| Session(load_page()));
    use_context_provider(|| session);

    let signed_in = session.read().0.is_some();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        if signed_in {
            div {
                key: "{lang_code()}",
                Router::<Route> {}
            }
        } else {
            SignedOut {}
        }
    }
}

/// Route layout around the shared shell (desktop flavour of the web layout).
#[component]
fn DesktopShell() -> Element {
    let session = use_context::<Signal<Session>>();
    let routes = use_hook(load_routes);
    let dispatcher = use_hook(|| {
        let logout_url = routes.url("logout").ok();
        DispatcherHandle::new(DesktopDispatcher {
            nav: navigator(),
            session,
            logout_url,
        })
    });

    let route = use_route::<Route>();
    let resolver = ResolverHandle::new(routes.clone().with_current_path(&route.to_string()));
    let title_key = match route {
        Route::DashboardPage {} => "page-dashboard-title",
        Route::ProfilePage {} => "page-profile-title",
    };
    let user = session.read().0.clone();

    rsx! {
        NavigationShell {
            user: user,
            resolver: resolver,
            dispatcher: dispatcher.clone(),
            header: rsx! { PageHeader { title: ui::i18n::tr(title_key) } },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn ProfilePage() -> Element {
    let session = use_context::<Signal<Session>>();
    let user = session.read().0.clone();
    rsx! {
        if let Some(user) = user {
            ProfileSummary { user: user }
        }
    }
}
