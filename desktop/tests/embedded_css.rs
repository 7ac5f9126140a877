#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! A broken path or truncated file would only show up at runtime as an
//! unstyled window, so check it at build time.
//!
//! If the theme moves, update both this test and the `include_str!` constant
//! in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded theme is empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-accent",
        "body {",
        ".visually-hidden",
        ".page-header",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
