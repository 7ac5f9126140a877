use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker; renders nothing unless more than one locale is embedded.
///
/// Platforms that want the rest of the page to follow a switch provide a
/// `Signal<String>` language code via context; it is updated after a successful switch.
#[component]
pub fn LocaleSelect() -> Element {
    let langs = use_hook(i18n::available_languages);
    let mut current = use_signal(i18n::current_language);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        match i18n::set_language(&value) {
            Ok(()) => {
                current.set(value.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(value);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %value, "language switch failed"),
        }
    };

    rsx! {
        div { class: "topnav__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current}",
                oninput: on_change,
                for code in langs.iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
