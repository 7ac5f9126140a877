//! Named-route resolution.
//!
//! Components never build URLs themselves; they ask a [`RouteResolver`] for
//! the URL of a symbolic route (`"dashboard"`, `"profile.edit"`, `"logout"`)
//! and whether a route is the one currently displayed.
//!
//! [`RouteTable`] is the stock resolver. It reads the JSON route list emitted
//! by Ziggy-style server helpers:
//!
//! ```text
//! {
//!   "url": "https://app.example.com",
//!   "routes": {
//!     "dashboard":    { "uri": "dashboard", "methods": ["GET", "HEAD"] },
//!     "profile.edit": { "uri": "profile",   "methods": ["GET", "HEAD"] },
//!     "logout":       { "uri": "logout",    "methods": ["POST"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wildmatch::WildMatch;

use crate::core::navigation::Method;
use crate::error::{Result, ShellError};

/// Resolves named routes and answers "is this route active?".
pub trait RouteResolver {
    /// Absolute or root-relative URL for `name`.
    fn url(&self, name: &str) -> Result<String>;

    /// Whether the current route matches `pattern` (`*` acts as a wildcard).
    fn is_current(&self, pattern: &str) -> bool;

    /// Whether `name` accepts `method`. Resolvers without method data accept everything.
    fn allows(&self, _name: &str, _method: Method) -> bool {
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub uri: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Base URL prepended to every uri; empty for root-relative links.
    #[serde(default)]
    pub url: String,
    pub routes: BTreeMap<String, RouteDef>,
    #[serde(default, skip_serializing)]
    current: Option<String>,
}

impl RouteTable {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| ShellError::Parse {
            what: "route table",
            source,
        })
    }

    pub fn with_route(mut self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        self.routes.insert(
            name.into(),
            RouteDef {
                uri: uri.into(),
                methods: Vec::new(),
            },
        );
        self
    }

    /// Mark `name` as the currently displayed route.
    pub fn with_current(mut self, name: impl Into<String>) -> Self {
        self.current = Some(name.into());
        self
    }

    /// Mark whichever route serves `path` as current (none if no route does).
    pub fn with_current_path(mut self, path: &str) -> Self {
        self.current = self.route_for_path(path).map(str::to_string);
        self
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Name of the route whose uri equals `path`, ignoring surrounding slashes,
    /// any query string and the base URL.
    pub fn route_for_path(&self, path: &str) -> Option<&str> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let wanted = self.local_path(path).trim_matches('/');
        self.routes
            .iter()
            .find(|(_, def)| {
                def.uri.trim_matches('/') == wanted
                    && (def.methods.is_empty() || def.methods.iter().any(|m| m.accepts(Method::Get)))
            })
            .map(|(name, _)| name.as_str())
    }

    /// `url` with the table's base URL removed, so `https://app.example.com/profile`
    /// becomes `/profile`. URLs on another origin come back unchanged.
    pub fn local_path<'a>(&self, url: &'a str) -> &'a str {
        let base = self.url.trim_end_matches('/');
        if base.is_empty() {
            return url;
        }
        match url.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => url,
        }
    }

    fn join(&self, uri: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let uri = uri.trim_start_matches('/');
        format!("{base}/{uri}")
    }
}

impl RouteResolver for RouteTable {
    fn url(&self, name: &str) -> Result<String> {
        self.routes
            .get(name)
            .map(|def| self.join(&def.uri))
            .ok_or_else(|| ShellError::UnknownRoute {
                name: name.to_string(),
            })
    }

    fn is_current(&self, pattern: &str) -> bool {
        self.current
            .as_deref()
            .is_some_and(|current| WildMatch::new(pattern).matches(current))
    }

    fn allows(&self, name: &str, method: Method) -> bool {
        match self.routes.get(name) {
            Some(def) if def.methods.is_empty() => true,
            Some(def) => def.methods.iter().any(|allowed| allowed.accepts(method)),
            None => false,
        }
    }
}

/// Shared, cheaply clonable resolver for component props.
#[derive(Clone)]
pub struct ResolverHandle(Rc<dyn RouteResolver>);

impl ResolverHandle {
    pub fn new(resolver: impl RouteResolver + 'static) -> Self {
        Self(Rc::new(resolver))
    }
}

impl std::ops::Deref for ResolverHandle {
    type Target = dyn RouteResolver;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ResolverHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for ResolverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResolverHandle(..)")
    }
}
