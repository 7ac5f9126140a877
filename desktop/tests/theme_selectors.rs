#![cfg(test)]
/*!
Selector lint for the shell stylesheet.

`NavigationShell` inlines `ui/assets/styling/shell.css` in release desktop
builds. The components emit the class names below; if one is renamed in the
markup but not in the stylesheet (or the other way round) the desktop window
silently loses that styling. Update REQUIRED_SELECTORS together with the
component markup.
*/

const SHELL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/shell.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Layout
    ".shell {",
    ".shell-failure",
    ".shell__header",
    ".shell__content",
    // Top bar
    ".topnav {",
    ".topnav__brand",
    ".topnav__link {",
    ".topnav__link--active",
    ".topnav__search",
    ".topnav__bell-dot",
    ".topnav__hamburger",
    ".avatar",
    // Mobile panel
    ".topnav__mobile {",
    ".topnav__responsive-link {",
    ".topnav__responsive-link--active",
    ".topnav__mobile-email",
    // Dropdown
    ".dropdown__trigger",
    ".dropdown__backdrop",
    ".dropdown__content[hidden]",
    ".dropdown__header-email",
    ".dropdown__link {",
    // Narrow viewport switch
    "@media (max-width: 640px)",
];

#[test]
fn shell_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !SHELL_CSS.contains(*sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required selectors in shell.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn hamburger_only_shows_on_narrow_viewports() {
    let (wide, narrow) = SHELL_CSS
        .split_once("@media (max-width: 640px)")
        .expect("shell.css has a narrow-viewport block");
    assert!(wide.contains(".topnav__hamburger {\n  display: none;"));
    assert!(narrow.contains(".topnav__hamburger {\n    display: inline-flex;"));
}
