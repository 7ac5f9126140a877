use dioxus::prelude::*;

use crate::core::navigation::Icon;

fn path_data(icon: Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10",
        Icon::User => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        Icon::Settings => "M10.3 4.3c.4-1.7 3-1.7 3.4 0a1.7 1.7 0 002.6 1.1c1.5-.9 3.3.8 2.4 2.4a1.7 1.7 0 001 2.5c1.8.4 1.8 3 0 3.4a1.7 1.7 0 00-1 2.6c.9 1.5-.9 3.3-2.4 2.4a1.7 1.7 0 00-2.6 1c-.4 1.8-3 1.8-3.4 0a1.7 1.7 0 00-2.5-1c-1.6.9-3.3-.9-2.4-2.4a1.7 1.7 0 00-1.1-2.6c-1.7-.4-1.7-3 0-3.4a1.7 1.7 0 001.1-2.5c-.9-1.6.8-3.3 2.4-2.4a1.7 1.7 0 002.5-1.1zM15 12a3 3 0 11-6 0 3 3 0 016 0z",
        Icon::Logout => "M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1",
        Icon::Bell => "M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 00-4-5.7V5a2 2 0 10-4 0v.3A6 6 0 006 11v3.2c0 .5-.2 1-.6 1.4L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9",
        Icon::Search => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
        Icon::Menu => "M4 6h16M4 12h16M4 18h16",
        Icon::Close => "M6 18L18 6M6 6l12 12",
    }
}

/// Inline outline glyph; decorative, hidden from assistive tech.
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    let d = path_data(icon);
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "{d}",
            }
        }
    }
}
