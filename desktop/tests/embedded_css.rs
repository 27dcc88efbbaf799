#![cfg(test)]
//! Release native builds inline two stylesheets: the shared theme
//! (`ui/assets/theme/main.css`, via `desktop/src/main.rs`) and the navbar
//! stylesheet (`ui/assets/styling/navbar.css`, via `HeaderNav`). A broken
//! `include_str!` path or a truncated file only shows up as unstyled chrome
//! at runtime; these checks catch it in CI instead.
//!
//! When relocating a stylesheet, update the matching constant here and in
//! the embedding component together.

const EMBEDDED_THEME: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const EMBEDDED_NAVBAR: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_theme_is_not_empty() {
    assert!(
        !EMBEDDED_THEME.trim().is_empty(),
        "the embedded theme stylesheet is empty"
    );
}

#[test]
fn embedded_navbar_css_is_not_empty() {
    assert!(
        !EMBEDDED_NAVBAR.trim().is_empty(),
        "the embedded navbar stylesheet is empty"
    );
}

#[test]
fn embedded_theme_contains_expected_tokens() {
    let required = ["--color-bg", ".page {", "body {", ".page-home__cta"];
    for token in required {
        assert!(
            EMBEDDED_THEME.contains(token),
            "`{token}` missing from the embedded theme"
        );
    }
}

#[test]
fn embedded_navbar_css_contains_expected_tokens() {
    let required = [".navbar", ".nav-menu__panel", ".nav-menu__scrim"];
    for token in required {
        assert!(
            EMBEDDED_NAVBAR.contains(token),
            "`{token}` missing from the embedded navbar stylesheet"
        );
    }
}
