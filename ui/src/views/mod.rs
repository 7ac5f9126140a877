mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::ProfileSummary;

mod signed_out;
pub use signed_out::SignedOut;

use dioxus::prelude::*;

/// Title for the shell's header band.
#[component]
pub fn PageHeader(title: String) -> Element {
    rsx! {
        h2 { class: "page-header", "{title}" }
    }
}
