use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SignedOut() -> Element {
    rsx! {
        section { class: "page page-signed-out",
            h1 { {t!("page-signed-out-title")} }
            p { {t!("page-signed-out-body")} }
        }
    }
}
