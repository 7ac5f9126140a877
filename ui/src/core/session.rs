//! Session data handed to the shell by the platform layer.
//!
//! The server supplies a page object (Inertia's `{ component, props, url,
//! version }` shape) whose `props.auth.user` identifies the signed-in viewer.
//! Platforms parse it once and pass the resulting [`CurrentUser`] down
//! explicitly; nothing in `ui` reads page data from a global.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// The authenticated viewer. Extra server fields (ids, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Up to two uppercase initials for the avatar badge (`"?"` when the name is blank).
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

/// Shared props attached to every server-rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    #[serde(default)]
    pub auth: Auth,
}

impl PageProps {
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.auth.user.as_ref()
    }
}

/// Page object as emitted by the server adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InertiaPage {
    pub component: String,
    #[serde(default)]
    pub props: PageProps,
    pub url: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl InertiaPage {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| ShellError::Parse {
            what: "page object",
            source,
        })
    }

    pub fn into_user(self) -> Option<CurrentUser> {
        self.props.auth.user
    }
}

/// Fail fast when the shell is asked to render for nobody.
pub fn require_user(user: Option<CurrentUser>) -> Result<CurrentUser> {
    user.ok_or(ShellError::MissingUser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(CurrentUser::new("Ada Lovelace", "a@x").initials(), "AL");
        assert_eq!(CurrentUser::new("ada", "a@x").initials(), "A");
        assert_eq!(
            CurrentUser::new("Grace Brewster Hopper", "g@x").initials(),
            "GB"
        );
        assert_eq!(CurrentUser::new("   ", "a@x").initials(), "?");
    }

    #[test]
    fn parses_page_object_with_user() {
        let raw = r#"{
            "component": "Dashboard",
            "props": {
                "auth": { "user": { "id": 1, "name": "Ada", "email": "ada@example.com", "email_verified_at": null } },
                "errors": {}
            },
            "url": "/dashboard",
            "version": "abc123"
        }"#;
        let page = InertiaPage::from_json(raw).unwrap();
        assert_eq!(page.component, "Dashboard");
        assert_eq!(page.version.as_deref(), Some("abc123"));
        assert_eq!(
            page.props.current_user(),
            Some(&CurrentUser::new("Ada", "ada@example.com"))
        );
    }

    #[test]
    fn null_user_parses_as_none() {
        let raw = r#"{ "component": "Welcome", "props": { "auth": { "user": null } }, "url": "/" }"#;
        let page = InertiaPage::from_json(raw).unwrap();
        assert!(page.into_user().is_none());
    }

    #[test]
    fn malformed_page_is_a_parse_error() {
        let err = InertiaPage::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShellError::Parse { what: "page object", .. }));
    }

    #[test]
    fn require_user_rejects_none() {
        assert!(matches!(require_user(None), Err(ShellError::MissingUser)));
        let ada = CurrentUser::new("Ada", "ada@example.com");
        assert_eq!(require_user(Some(ada.clone())).unwrap(), ada);
    }
}
