//! Shell configuration: brand and the menu entries the bar renders.
//!
//! The built-in default mirrors the classic authenticated layout:
//!
//! - primary: Dashboard (`dashboard`)
//! - account: Profile (`profile.edit`), Settings (`profile.edit`), Log Out (`POST logout`, as a button)
//!
//! Settings shares the profile page but highlights only on `settings.*` routes,
//! so the profile page marks a single dropdown row as active.
//!
//! Platforms may ship their own JSON instead:
//!
//! ```text
//! {
//!   "brand": "Portico",
//!   "home_route": "dashboard",
//!   "primary": [ { "label": "nav-dashboard", "icon": "dashboard", "action": { "route": "dashboard" } } ],
//!   "account": [ { "label": "nav-logout", "icon": "logout", "action": { "route": "logout", "method": "POST" }, "as_button": true } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::navigation::{resolve_all, Icon, MenuAction, MenuEntry, ResolvedEntry};
use crate::core::routing::RouteResolver;
use crate::error::{Result, ShellError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub brand: String,
    /// Route the logo links to.
    pub home_route: String,
    #[serde(default)]
    pub primary: Vec<MenuEntry>,
    #[serde(default)]
    pub account: Vec<MenuEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "Portico".to_string(),
            home_route: "dashboard".to_string(),
            primary: vec![MenuEntry::link("nav-dashboard", "dashboard").with_icon(Icon::Dashboard)],
            account: vec![
                MenuEntry::link("nav-profile", "profile.edit").with_icon(Icon::User),
                MenuEntry::link("nav-settings", "profile.edit")
                    .with_icon(Icon::Settings)
                    .with_active_pattern("settings.*"),
                MenuEntry::button("nav-logout", MenuAction::post("logout")).with_icon(Icon::Logout),
            ],
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| ShellError::Parse {
            what: "shell config",
            source,
        })
    }

    /// Every label key referenced by this configuration.
    pub fn label_keys(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.account.iter())
            .map(|entry| entry.label.as_str())
    }
}

/// A [`ShellConfig`] resolved against the current routes; what the bar renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellNav {
    pub brand: String,
    pub home_href: String,
    pub primary: Vec<ResolvedEntry>,
    pub account: Vec<ResolvedEntry>,
}

impl ShellNav {
    pub fn resolve(config: &ShellConfig, resolver: &dyn RouteResolver) -> Result<Self> {
        Ok(Self {
            brand: config.brand.clone(),
            home_href: resolver.url(&config.home_route)?,
            primary: resolve_all(&config.primary, resolver)?,
            account: resolve_all(&config.account, resolver)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Method;
    use crate::core::routing::RouteTable;

    fn routes() -> RouteTable {
        RouteTable::default()
            .with_route("dashboard", "dashboard")
            .with_route("profile.edit", "profile")
            .with_route("logout", "logout")
    }

    #[test]
    fn default_config_resolves_against_stock_routes() {
        let nav = ShellNav::resolve(&ShellConfig::default(), &routes().with_current("dashboard")).unwrap();
        assert_eq!(nav.home_href, "/dashboard");
        assert_eq!(nav.primary.len(), 1);
        assert!(nav.primary[0].active);

        let hrefs: Vec<_> = nav.account.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, ["/profile", "/profile", "/logout"]);

        let logout = &nav.account[2];
        assert_eq!(logout.method, Method::Post);
        assert!(logout.as_button);
    }

    #[test]
    fn profile_page_highlights_one_account_row() {
        let nav = ShellNav::resolve(&ShellConfig::default(), &routes().with_current("profile.edit")).unwrap();
        let active: Vec<_> = nav.account.iter().filter(|e| e.active).map(|e| e.label.as_str()).collect();
        assert_eq!(active, ["nav-profile"]);
        assert!(!nav.primary[0].active);
    }

    #[test]
    fn missing_route_fails_resolution() {
        let routes = RouteTable::default().with_route("dashboard", "dashboard");
        let err = ShellNav::resolve(&ShellConfig::default(), &routes).unwrap_err();
        assert!(matches!(err, ShellError::UnknownRoute { name } if name == "profile.edit"));
    }

    #[test]
    fn parses_json_config() {
        let config = ShellConfig::from_json(
            r#"{
                "brand": "Acme",
                "home_route": "dashboard",
                "primary": [ { "label": "nav-dashboard", "icon": "dashboard", "action": { "route": "dashboard" } } ],
                "account": [ { "label": "nav-logout", "icon": "logout", "action": { "route": "logout", "method": "POST" }, "as_button": true } ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.account[0].icon, Some(Icon::Logout));
        assert!(config.account[0].as_button);
        assert_eq!(config.label_keys().collect::<Vec<_>>(), ["nav-dashboard", "nav-logout"]);
    }

    #[test]
    fn default_labels_are_translated() {
        crate::i18n::init();
        for key in ShellConfig::default().label_keys() {
            assert!(crate::i18n::has(key), "missing fallback translation for {key}");
        }
    }
}
