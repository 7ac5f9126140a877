//! Shared UI crate for Portico: the authenticated navigation shell, its
//! platform-agnostic model, localization and page views.

pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

pub mod components {
    mod dropdown;
    mod entry_link;
    mod icons;
    mod locale_select;
    mod navigation_shell;
    mod top_navigation;

    pub use dropdown::Dropdown;
    pub use entry_link::{EntryLink, LinkVariant};
    pub use icons::IconGlyph;
    pub use locale_select::LocaleSelect;
    pub use navigation_shell::NavigationShell;
    pub use top_navigation::TopNavigation;
}

pub use crate::core::config::{ShellConfig, ShellNav};
pub use crate::core::menu::MobileMenuState;
pub use crate::core::navigation::{Dispatcher, DispatcherHandle, Method, MenuEntry, Visit};
pub use crate::core::routing::{ResolverHandle, RouteResolver, RouteTable};
pub use crate::core::session::CurrentUser;
pub use crate::error::ShellError;

use dioxus::prelude::{asset, manganis, Asset};

/// Base page theme shared by the platform crates.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
