use dioxus::prelude::*;

use crate::core::config::ShellNav;
use crate::core::menu::MobileMenuState;
use crate::core::navigation::{DispatcherHandle, Icon, Method, Visit};
use crate::core::session::CurrentUser;
use crate::t;

use super::dropdown::Dropdown;
use super::entry_link::{EntryLink, LinkVariant};
use super::icons::IconGlyph;
use super::locale_select::LocaleSelect;

/// Top bar: brand, primary links, decorative search and notification glyph,
/// account dropdown, and the hamburger that opens the stacked mobile panel.
///
/// Stateless apart from flipping `mobile_menu` when the hamburger is clicked.
/// The mobile panel is only mounted while the menu is open.
#[component]
pub fn TopNavigation(
    user: CurrentUser,
    mobile_menu: Signal<MobileMenuState>,
    nav: ShellNav,
    dispatcher: DispatcherHandle,
) -> Element {
    let mut mobile_menu = mobile_menu;
    let menu = mobile_menu();
    let initials = user.initials();
    let toggle_icon = if menu.is_open() { Icon::Close } else { Icon::Menu };

    let search_label = t!("nav-search-label");
    let search_placeholder = t!("nav-search-placeholder");
    let notifications_label = t!("nav-notifications");
    let toggle_label = t!("nav-toggle-menu");
    let account_label = t!("nav-account-menu");

    let go_home = {
        let dispatcher = dispatcher.clone();
        let url = nav.home_href.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            dispatcher.dispatch(Visit {
                url: url.clone(),
                method: Method::Get,
            });
        }
    };

    rsx! {
        nav { class: "topnav",
            div { class: "topnav__inner",
                div { class: "topnav__start",
                    a { class: "topnav__brand", href: "{nav.home_href}", onclick: go_home,
                        span { class: "topnav__brand-mark", aria_hidden: "true" }
                        span { class: "topnav__brand-name", "{nav.brand}" }
                    }
                    div { class: "topnav__links",
                        for (idx, entry) in nav.primary.iter().enumerate() {
                            EntryLink {
                                key: "{idx}",
                                entry: entry.clone(),
                                dispatcher: dispatcher.clone(),
                                variant: LinkVariant::Nav,
                            }
                        }
                    }
                }

                div { class: "topnav__end",
                    // No handlers: search and notifications are placeholders.
                    div { class: "topnav__search",
                        label { class: "visually-hidden", r#for: "topnav-search", "{search_label}" }
                        IconGlyph { icon: Icon::Search }
                        input {
                            id: "topnav-search",
                            r#type: "search",
                            placeholder: "{search_placeholder}",
                            autocomplete: "off",
                        }
                    }
                    button {
                        r#type: "button",
                        class: "topnav__bell",
                        aria_label: "{notifications_label}",
                        IconGlyph { icon: Icon::Bell }
                        span { class: "topnav__bell-dot" }
                    }
                    LocaleSelect {}
                    div { class: "topnav__account",
                        Dropdown {
                            label: account_label,
                            trigger: rsx! {
                                span { class: "avatar", "{initials}" }
                                span { class: "topnav__account-name", "{user.name}" }
                            },
                            header: rsx! {
                                div { class: "dropdown__header-name", "{user.name}" }
                                div { class: "dropdown__header-email", "{user.email}" }
                            },
                            entries: nav.account.clone(),
                            dispatcher: dispatcher.clone(),
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "topnav__hamburger",
                    aria_controls: "topnav-mobile",
                    aria_expanded: menu.aria_expanded(),
                    aria_label: "{toggle_label}",
                    onclick: move |_| mobile_menu.with_mut(MobileMenuState::toggle),
                    IconGlyph { icon: toggle_icon }
                }
            }

            if menu.is_open() {
                div { id: "topnav-mobile", class: "topnav__mobile",
                    div { class: "topnav__mobile-links",
                        for (idx, entry) in nav.primary.iter().enumerate() {
                            EntryLink {
                                key: "primary-{idx}",
                                entry: entry.clone(),
                                dispatcher: dispatcher.clone(),
                                variant: LinkVariant::Responsive,
                            }
                        }
                    }
                    div { class: "topnav__mobile-user",
                        div { class: "topnav__mobile-name", "{user.name}" }
                        div { class: "topnav__mobile-email", "{user.email}" }
                    }
                    div { class: "topnav__mobile-links",
                        for (idx, entry) in nav.account.iter().enumerate() {
                            EntryLink {
                                key: "account-{idx}",
                                entry: entry.clone(),
                                dispatcher: dispatcher.clone(),
                                variant: LinkVariant::Responsive,
                            }
                        }
                    }
                }
            }
        }
    }
}
