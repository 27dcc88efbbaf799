#![cfg(test)]
//! Selector lint for the stylesheets the desktop build embeds.
//!
//! Components address CSS classes by name, so a rename on either side gets
//! past the compiler and only surfaces as broken styling in a packaged
//! build. These checks pin the selectors the markup relies on (header
//! strip, dropdown panels, dismissal scrim, page scaffold) to the embedded
//! files with plain substring checks.
//!
//! When renaming a class, update the component markup and the matching
//! entry here together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors / tokens that must exist in the shared theme.
const THEME_REQUIRED: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Home view
    ".page-home",
    ".page-home__hints",
    ".page-home__cta",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

/// Selectors / tokens that must exist in the navbar stylesheet.
const NAVBAR_REQUIRED: &[&str] = &[
    // Header chrome
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__brand-mark",
    ".navbar__brand-subtitle",
    ".navbar__links",
    ".navbar__link,",
    ".navbar__locale",
    ".visually-hidden",
    // Dropdown menus
    ".nav-menu {",
    ".nav-menu__trigger",
    ".nav-menu__chevron",
    ".nav-menu[data-state=\"open\"]",
    ".nav-menu__panel",
    ".nav-menu__item",
    ".nav-menu__scrim",
    // Media query token
    "@media (max-width: 720px)",
];

fn assert_selectors(css: &str, required: &[&str], which: &str) {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in {which}:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_contains_required_selectors() {
    assert_selectors(THEME_CSS, THEME_REQUIRED, "theme (main.css)");
}

#[test]
fn navbar_css_contains_required_selectors() {
    assert_selectors(NAVBAR_CSS, NAVBAR_REQUIRED, "navbar stylesheet");
}

#[test]
fn stylesheets_not_trivially_empty() {
    let theme_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        theme_len > 1_200,
        "Embedded theme appears unexpectedly small ({theme_len} non-whitespace chars); \
         did the file get truncated or path change?"
    );

    let navbar_len = NAVBAR_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        navbar_len > 2_000,
        "Navbar stylesheet appears unexpectedly small ({navbar_len} non-whitespace chars); \
         did the file get truncated or path change?"
    );
}

#[test]
fn chevron_transition_pairing() {
    // The open-state rotation is only meaningful with the transition rule.
    let has_transition = NAVBAR_CSS.contains("transition: transform");
    let has_rotation = NAVBAR_CSS.contains("rotate(180deg)");
    assert!(
        has_transition && has_rotation,
        "Chevron styling incomplete (transition: {has_transition}, rotation: {has_rotation})"
    );
}
