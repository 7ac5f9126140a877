use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            div { class: "card",
                p { {crate::t!("page-dashboard-body")} }
            }
        }
    }
}
