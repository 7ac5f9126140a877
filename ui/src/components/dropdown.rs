use dioxus::prelude::*;

use crate::core::navigation::{DispatcherHandle, ResolvedEntry};

use super::entry_link::{EntryLink, LinkVariant};

/// Menu anchored to the right edge of `trigger`, built from a flat entry list.
///
/// The content stays mounted while closed (hidden), so its header is part of
/// the document either way. A click on the backdrop or on any entry closes it.
#[component]
pub fn Dropdown(
    trigger: Element,
    header: Option<Element>,
    entries: Vec<ResolvedEntry>,
    dispatcher: DispatcherHandle,
    #[props(into, default)] label: String,
) -> Element {
    let mut open = use_signal(|| false);
    let is_open = open();
    let content_class = if is_open {
        "dropdown__content dropdown__content--open"
    } else {
        "dropdown__content"
    };

    rsx! {
        div { class: "dropdown",
            button {
                r#type: "button",
                class: "dropdown__trigger",
                aria_haspopup: "menu",
                aria_expanded: "{is_open}",
                aria_label: "{label}",
                onclick: move |_| open.with_mut(|o| *o = !*o),
                {trigger}
            }
            if is_open {
                div {
                    class: "dropdown__backdrop",
                    onclick: move |_| open.set(false),
                }
            }
            div { class: "{content_class}", role: "menu", hidden: !is_open,
                if let Some(band) = header {
                    div { class: "dropdown__header", {band} }
                }
                for (idx, entry) in entries.iter().enumerate() {
                    EntryLink {
                        key: "{idx}",
                        entry: entry.clone(),
                        dispatcher: dispatcher.clone(),
                        variant: LinkVariant::Dropdown,
                        on_activate: move |_| open.set(false),
                    }
                }
            }
        }
    }
}
