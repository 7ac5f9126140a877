//! Browser glue used by the web build.
//!
//! On native targets the same functions exist but report the browser API as
//! unavailable, so platform crates can call them unconditionally.

use crate::core::navigation::Visit;
use crate::core::session::InertiaPage;
use crate::error::Result;

/// Element whose `data-page` attribute carries the server page object.
pub const PAGE_ELEMENT_ID: &str = "app";

/// Read the page object the server embedded in the document, if any.
pub fn read_page() -> Result<Option<InertiaPage>> {
    imp::read_page()
}

/// Value of `<meta name="csrf-token">`, forwarded as `_token` on form posts.
pub fn csrf_token() -> Option<String> {
    imp::csrf_token()
}

/// Full-page navigation to `url`.
pub fn assign_location(url: &str) -> Result<()> {
    imp::assign_location(url)
}

/// Submit `visit` as a hidden HTML form. GET and HEAD visits become a plain
/// location change; methods other than POST are sent as POST with a `_method`
/// override.
pub fn submit_form(visit: &Visit) -> Result<()> {
    imp::submit_form(visit)
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlFormElement, HtmlInputElement};

    use super::PAGE_ELEMENT_ID;
    use crate::core::navigation::Visit;
    use crate::core::session::InertiaPage;
    use crate::error::{Result, ShellError};

    fn js_err(err: JsValue) -> ShellError {
        ShellError::Browser(format!("{err:?}"))
    }

    fn document() -> Result<Document> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ShellError::Browser("no document".to_string()))
    }

    pub fn read_page() -> Result<Option<InertiaPage>> {
        let raw = document()?
            .get_element_by_id(PAGE_ELEMENT_ID)
            .and_then(|el| el.get_attribute("data-page"));
        match raw {
            Some(raw) => InertiaPage::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn csrf_token() -> Option<String> {
        document()
            .ok()?
            .query_selector("meta[name=\"csrf-token\"]")
            .ok()
            .flatten()?
            .get_attribute("content")
    }

    pub fn assign_location(url: &str) -> Result<()> {
        web_sys::window()
            .ok_or_else(|| ShellError::Browser("no window".to_string()))?
            .location()
            .set_href(url)
            .map_err(js_err)
    }

    pub fn submit_form(visit: &Visit) -> Result<()> {
        if visit.method.is_navigation() {
            return assign_location(&visit.url);
        }

        let doc = document()?;
        let form: HtmlFormElement = doc
            .create_element("form")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ShellError::Browser("form element".to_string()))?;
        form.set_method("post");
        form.set_action(&visit.url);
        form.set_hidden(true);

        if let Some(token) = csrf_token() {
            append_hidden(&doc, &form, "_token", &token)?;
        }
        if visit.method.needs_spoofing() {
            append_hidden(&doc, &form, "_method", visit.method.as_str())?;
        }

        doc.body()
            .ok_or_else(|| ShellError::Browser("no body".to_string()))?
            .append_child(&form)
            .map_err(js_err)?;
        form.submit().map_err(js_err)
    }

    fn append_hidden(doc: &Document, form: &HtmlFormElement, name: &str, value: &str) -> Result<()> {
        let input: HtmlInputElement = doc
            .create_element("input")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ShellError::Browser("input element".to_string()))?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input).map_err(js_err)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use crate::core::navigation::Visit;
    use crate::core::session::InertiaPage;
    use crate::error::{Result, ShellError};

    fn unavailable() -> ShellError {
        ShellError::Browser("not running in a browser".to_string())
    }

    pub fn read_page() -> Result<Option<InertiaPage>> {
        Ok(None)
    }

    pub fn csrf_token() -> Option<String> {
        None
    }

    pub fn assign_location(_url: &str) -> Result<()> {
        Err(unavailable())
    }

    pub fn submit_form(_visit: &Visit) -> Result<()> {
        Err(unavailable())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::core::navigation::Method;
    use crate::error::ShellError;

    #[test]
    fn native_build_has_no_browser() {
        assert!(read_page().unwrap().is_none());
        assert!(csrf_token().is_none());
        let visit = Visit {
            url: "/logout".into(),
            method: Method::Post,
        };
        assert!(matches!(submit_form(&visit), Err(ShellError::Browser(_))));
    }
}
