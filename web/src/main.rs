use dioxus::prelude::*;

use ui::components::NavigationShell;
use ui::core::platform;
use ui::core::session::InertiaPage;
use ui::views::{Dashboard, PageHeader, ProfileSummary};
use ui::{CurrentUser, Dispatcher, DispatcherHandle, ResolverHandle, RouteTable, Visit};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[redirect("/", || Route::DashboardPage {})]
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/profile")]
    ProfilePage {},
}

/// Ziggy route list; must stay in sync with the server's named routes.
const ROUTES_JSON: &str = include_str!("../assets/routes.json");

/// Viewer parsed from the server's page object, shared with routed pages.
#[derive(Debug, Clone, PartialEq)]
struct Session(Option<CurrentUser>);

/// GET and HEAD visits to known client routes stay in the SPA router; anything
/// else leaves the page (GET/HEAD) or is posted as a form (logout and friends).
struct WebDispatcher {
    nav: Navigator,
    routes: RouteTable,
}

impl Dispatcher for WebDispatcher {
    fn dispatch(&self, visit: Visit) {
        if visit.method.is_navigation() {
            // Resolved URLs carry the route table's base; the router only knows paths.
            if let Ok(route) = self.routes.local_path(&visit.url).parse::<Route>() {
                self.nav.push(route);
                return;
            }
            if let Err(err) = platform::assign_location(&visit.url) {
                tracing::warn!(%err, url = %visit.url, "full-page navigation failed");
            }
            return;
        }

        if let Err(err) = platform::submit_form(&visit) {
            tracing::error!(%err, url = %visit.url, method = %visit.method, "form visit failed");
        }
    }
}

fn load_user() -> Option<CurrentUser> {
    match platform::read_page() {
        Ok(page) => page.and_then(InertiaPage::into_user),
        Err(err) => {
            tracing::error!(%err, "page object is unreadable");
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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // LocaleSelect updates this after a switch; keying the router on it remounts the pages.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code}",
            Router::<Route> {}
        }
    }
}

/// Route layout: injects session, routes and dispatcher into the shared shell.
#[component]
fn WebShell() -> Element {
    let session = use_hook(|| Session(load_user()));
    use_context_provider(|| session.clone());
    let routes = use_hook(load_routes);
    let dispatcher = use_hook(|| {
        DispatcherHandle::new(WebDispatcher {
            nav: navigator(),
            routes: routes.clone(),
        })
    });

    let route = use_route::<Route>();
    let resolver = ResolverHandle::new(routes.clone().with_current_path(&route.to_string()));
    let title_key = match route {
        Route::DashboardPage {} => "page-dashboard-title",
        Route::ProfilePage {} => "page-profile-title",
    };

    rsx! {
        NavigationShell {
            user: session.0.clone(),
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
    let Session(user) = use_context::<Session>();
    rsx! {
        if let Some(user) = user {
            ProfileSummary { user: user }
        }
    }
}
