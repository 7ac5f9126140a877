use dioxus::prelude::*;

use crate::core::config::{ShellConfig, ShellNav};
use crate::core::menu::MobileMenuState;
use crate::core::navigation::DispatcherHandle;
use crate::core::routing::ResolverHandle;
use crate::core::session::{self, CurrentUser};
use crate::i18n;
use crate::t;

use super::top_navigation::TopNavigation;

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SHELL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

/// Authenticated page layout: top navigation, optional header band, content.
///
/// Everything the layout depends on is passed in. `user` is optional only so
/// that a missing session fails loudly here (an alert region plus an error
/// event) instead of producing an empty page. The same applies to a config
/// that names routes the resolver does not know.
///
/// ```ignore
/// rsx! {
///     NavigationShell {
///         user: page.into_user(),
///         resolver: ResolverHandle::new(routes),
///         dispatcher: DispatcherHandle::new(MyDispatcher),
///         header: rsx! { PageHeader { title: t!("page-dashboard-title") } },
///         Dashboard {}
///     }
/// }
/// ```
#[component]
pub fn NavigationShell(
    #[props(!optional)] user: Option<CurrentUser>,
    resolver: ResolverHandle,
    dispatcher: DispatcherHandle,
    #[props(default)] config: ShellConfig,
    header: Option<Element>,
    children: Element,
) -> Element {
    i18n::init();

    let mobile_menu = use_signal(MobileMenuState::closed);

    let user = match session::require_user(user) {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(%err, "refusing to render navigation shell");
            return rsx! {
                ShellFailure { message: t!("shell-missing-user") }
            };
        }
    };

    let nav = match ShellNav::resolve(&config, &*resolver) {
        Ok(nav) => nav,
        Err(err) => {
            tracing::error!(%err, "shell config does not match the route table");
            return rsx! {
                ShellFailure { message: t!("shell-config-error", reason = err.to_string()) }
            };
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHELL_CSS_INLINE}" }
        }

        div { class: "shell",
            TopNavigation {
                user: user.clone(),
                mobile_menu: mobile_menu,
                nav: nav.clone(),
                dispatcher: dispatcher.clone(),
            }
            if let Some(band) = header {
                header { class: "shell__header",
                    div { class: "shell__header-inner", {band} }
                }
            }
            main { class: "shell__content", {children} }
        }
    }
}

#[component]
fn ShellFailure(message: String) -> Element {
    rsx! {
        div { class: "shell-failure", role: "alert", "{message}" }
    }
}
