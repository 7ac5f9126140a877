//! Navigation entries and the dispatch seam.
//!
//! A [`MenuEntry`] is configuration: a label key, an icon and an action
//! (named route + HTTP method). Resolving it against a
//! [`RouteResolver`](crate::core::routing::RouteResolver) produces a
//! [`ResolvedEntry`] the components render. Activating a resolved entry hands
//! exactly one [`Visit`] to the platform's [`Dispatcher`]; rendering never does.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::routing::RouteResolver;
use crate::error::{Result, ShellError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// A route registered for `self` also serves `other` (GET routes answer HEAD).
    pub fn accepts(self, other: Method) -> bool {
        self == other || (self == Method::Get && other == Method::Head)
    }

    /// GET and HEAD visits are plain navigations; they never become form posts.
    pub fn is_navigation(self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }

    /// HTML forms only speak GET and POST; everything else rides on POST with an override.
    pub fn needs_spoofing(self) -> bool {
        matches!(self, Method::Put | Method::Patch | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Dashboard,
    User,
    Settings,
    Logout,
    Bell,
    Search,
    Menu,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAction {
    pub route: String,
    #[serde(default)]
    pub method: Method,
}

impl MenuAction {
    pub fn get(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            method: Method::Get,
        }
    }

    pub fn post(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            method: Method::Post,
        }
    }
}

/// One configurable navigation row: `{label, icon, action}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Localization key for the visible label.
    pub label: String,
    #[serde(default)]
    pub icon: Option<Icon>,
    pub action: MenuAction,
    /// Render as a `<button>` instead of a link.
    #[serde(default)]
    pub as_button: bool,
    /// Pattern used for active highlighting; defaults to the action's route.
    #[serde(default)]
    pub active_pattern: Option<String>,
}

impl MenuEntry {
    pub fn link(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action: MenuAction::get(route),
            as_button: false,
            active_pattern: None,
        }
    }

    pub fn button(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action,
            as_button: true,
            active_pattern: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_active_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.active_pattern = Some(pattern.into());
        self
    }

    pub fn resolve(&self, resolver: &dyn RouteResolver) -> Result<ResolvedEntry> {
        let route = &self.action.route;
        let method = self.action.method;
        if !resolver.allows(route, method) {
            return Err(ShellError::MethodNotAllowed {
                name: route.clone(),
                method,
            });
        }
        let href = resolver.url(route)?;
        let pattern = self.active_pattern.as_deref().unwrap_or(route);
        Ok(ResolvedEntry {
            label: self.label.clone(),
            icon: self.icon,
            href,
            method,
            as_button: self.as_button,
            active: resolver.is_current(pattern),
        })
    }
}

/// A [`MenuEntry`] with its route turned into a concrete target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub label: String,
    pub icon: Option<Icon>,
    pub href: String,
    pub method: Method,
    pub as_button: bool,
    pub active: bool,
}

impl ResolvedEntry {
    pub fn visit(&self) -> Visit {
        Visit {
            url: self.href.clone(),
            method: self.method,
        }
    }
}

pub fn resolve_all(entries: &[MenuEntry], resolver: &dyn RouteResolver) -> Result<Vec<ResolvedEntry>> {
    entries.iter().map(|entry| entry.resolve(resolver)).collect()
}

/// A single navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub url: String,
    pub method: Method,
}

/// Platform hook that carries out visits (client-side routing, form posts, ...).
pub trait Dispatcher {
    fn dispatch(&self, visit: Visit);
}

/// Issue the entry's visit. Called from click handlers only.
pub fn activate(entry: &ResolvedEntry, dispatcher: &dyn Dispatcher) {
    let visit = entry.visit();
    tracing::debug!(url = %visit.url, method = %visit.method, "dispatching visit");
    dispatcher.dispatch(visit);
}

#[derive(Clone)]
pub struct DispatcherHandle(Rc<dyn Dispatcher>);

impl DispatcherHandle {
    pub fn new(dispatcher: impl Dispatcher + 'static) -> Self {
        Self(Rc::new(dispatcher))
    }

    pub fn from_rc(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self(dispatcher)
    }
}

impl std::ops::Deref for DispatcherHandle {
    type Target = dyn Dispatcher;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for DispatcherHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for DispatcherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DispatcherHandle(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::routing::RouteTable;

    #[derive(Default)]
    struct Recorder {
        visits: RefCell<Vec<Visit>>,
    }

    impl Dispatcher for Recorder {
        fn dispatch(&self, visit: Visit) {
            self.visits.borrow_mut().push(visit);
        }
    }

    fn table() -> RouteTable {
        RouteTable::from_json(
            r#"{ "url": "", "routes": {
                "dashboard": { "uri": "dashboard", "methods": ["GET", "HEAD"] },
                "profile.edit": { "uri": "profile", "methods": ["GET", "HEAD"] },
                "logout": { "uri": "logout", "methods": ["POST"] }
            } }"#,
        )
        .unwrap()
    }

    #[test]
    fn logout_activation_posts_once() {
        let logout = MenuEntry::button("nav-logout", MenuAction::post("logout"))
            .resolve(&table())
            .unwrap();
        let recorder = Recorder::default();

        activate(&logout, &recorder);

        assert_eq!(
            recorder.visits.borrow().as_slice(),
            &[Visit {
                url: "/logout".into(),
                method: Method::Post
            }]
        );
    }

    #[test]
    fn resolving_does_not_dispatch() {
        let recorder = Recorder::default();
        let entries = vec![
            MenuEntry::link("nav-dashboard", "dashboard"),
            MenuEntry::button("nav-logout", MenuAction::post("logout")),
        ];
        let resolved = resolve_all(&entries, &table()).unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(recorder.visits.borrow().is_empty());
    }

    #[test]
    fn active_flag_follows_current_route() {
        let entry = MenuEntry::link("nav-dashboard", "dashboard");
        assert!(entry.resolve(&table().with_current("dashboard")).unwrap().active);
        assert!(!entry.resolve(&table().with_current("profile.edit")).unwrap().active);
    }

    #[test]
    fn custom_active_pattern() {
        let mut entry = MenuEntry::link("nav-profile", "profile.edit");
        entry.active_pattern = Some("profile.*".into());
        let resolved = entry.resolve(&table().with_current("profile.update")).unwrap();
        assert!(resolved.active);
    }

    #[test]
    fn wrong_method_is_rejected() {
        let err = MenuEntry::link("nav-logout", "logout").resolve(&table()).unwrap_err();
        assert!(matches!(
            err,
            ShellError::MethodNotAllowed { ref name, method: Method::Get } if name == "logout"
        ));
    }

    #[test]
    fn method_serialization_and_spoofing() {
        let action: MenuAction = serde_json::from_str(r#"{ "route": "logout", "method": "POST" }"#).unwrap();
        assert_eq!(action, MenuAction::post("logout"));
        let action: MenuAction = serde_json::from_str(r#"{ "route": "dashboard" }"#).unwrap();
        assert_eq!(action.method, Method::Get);

        assert!(Method::Delete.needs_spoofing());
        assert!(!Method::Post.needs_spoofing());
        assert!(Method::Get.accepts(Method::Head));
        assert!(!Method::Head.accepts(Method::Get));
    }

    #[test]
    fn head_entries_navigate_like_get() {
        let action: MenuAction = serde_json::from_str(r#"{ "route": "dashboard", "method": "HEAD" }"#).unwrap();
        let entry = MenuEntry {
            action,
            ..MenuEntry::link("nav-dashboard", "dashboard")
        };
        let resolved = entry.resolve(&table()).unwrap();
        assert_eq!(resolved.method, Method::Head);
        assert!(resolved.method.is_navigation());
        assert!(!resolved.method.needs_spoofing());

        assert!(Method::Get.is_navigation());
        assert!(!Method::Post.is_navigation());
        assert!(!Method::Delete.is_navigation());
    }
}
