//! Shared UI crate for Lintel. Cross-platform navigation logic and views live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Header shell: brand + menu strip + locale switcher (components/header_nav.rs)
    pub mod header_nav;
    pub use header_nav::HeaderNav;

    // Horizontal strip owning the open-dropdown state (components/nav_horizontal.rs)
    pub mod nav_horizontal;
    pub use nav_horizontal::NavHorizontal;

    pub mod collapsible;
    pub use collapsible::Collapsible;

    pub mod icon;
    pub use icon::Icon;
}
