use dioxus::prelude::*;

use crate::core::session::CurrentUser;
use crate::t;

/// Read-only account summary. Editing lives server-side.
#[component]
pub fn ProfileSummary(user: CurrentUser) -> Element {
    rsx! {
        section { class: "page page-profile",
            div { class: "card",
                dl { class: "profile-summary",
                    dt { {t!("page-profile-name")} }
                    dd { "{user.name}" }
                    dt { {t!("page-profile-email")} }
                    dd { "{user.email}" }
                }
            }
        }
    }
}
