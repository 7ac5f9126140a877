use dioxus::prelude::*;

use crate::core::navigation::{activate, DispatcherHandle, ResolvedEntry};
use crate::i18n;

use super::icons::IconGlyph;

/// Where a link is drawn; the target is the same in every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkVariant {
    /// Horizontal bar on wide viewports.
    #[default]
    Nav,
    /// Stacked row in the mobile panel.
    Responsive,
    /// Row inside a dropdown.
    Dropdown,
}

impl LinkVariant {
    pub fn class(self, active: bool) -> String {
        let base = match self {
            LinkVariant::Nav => "topnav__link",
            LinkVariant::Responsive => "topnav__responsive-link",
            LinkVariant::Dropdown => "dropdown__link",
        };
        if active {
            format!("{base} {base}--active")
        } else {
            base.to_string()
        }
    }
}

/// One navigation primitive: an anchor, or a button when the entry asks for it
/// (e.g. logout with a POST override). Clicks go through the dispatcher.
#[component]
pub fn EntryLink(
    entry: ResolvedEntry,
    dispatcher: DispatcherHandle,
    #[props(default)] variant: LinkVariant,
    on_activate: Option<EventHandler<()>>,
) -> Element {
    let class = variant.class(entry.active);
    let label = i18n::tr(&entry.label);
    let method = entry.method.as_str().to_ascii_lowercase();
    let aria_current = if entry.active { "page" } else { "false" };
    let icon = entry.icon;

    let onclick = {
        let entry = entry.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            activate(&entry, &*dispatcher);
            if let Some(handler) = on_activate {
                handler.call(());
            }
        }
    };

    if entry.as_button {
        return rsx! {
            button {
                r#type: "button",
                class: "{class}",
                "data-href": "{entry.href}",
                "data-method": "{method}",
                onclick: onclick,
                if let Some(icon) = icon {
                    IconGlyph { icon: icon }
                }
                span { "{label}" }
            }
        };
    }

    rsx! {
        a {
            class: "{class}",
            href: "{entry.href}",
            aria_current: aria_current,
            onclick: onclick,
            if let Some(icon) = icon {
                IconGlyph { icon: icon }
            }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes() {
        assert_eq!(LinkVariant::Nav.class(false), "topnav__link");
        assert_eq!(LinkVariant::Nav.class(true), "topnav__link topnav__link--active");
        assert_eq!(
            LinkVariant::Responsive.class(true),
            "topnav__responsive-link topnav__responsive-link--active"
        );
        assert_eq!(LinkVariant::Dropdown.class(false), "dropdown__link");
    }
}
