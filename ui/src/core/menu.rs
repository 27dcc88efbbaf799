//! Menu entry model for the header navigation strip.
//!
//! Entries are static configuration handed in by the application shell; the
//! strip renders them in order and never mutates them. The leaf/menu split
//! is explicit in the type so the renderer dispatches exhaustively instead
//! of probing an optional children field.

use serde::{Deserialize, Serialize};

/// Glyph names the icon component knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Terminal,
    Bot,
    BookOpen,
    Gear,
    ChevronDown,
}

/// One link inside an open dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    pub title: String,
    pub target: String,
}

impl NavChild {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
        }
    }
}

/// Leaf entry: a plain link with no dropdown interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
}

/// Entry owning a dropdown panel of child links.
///
/// `target` is only rendered when `items` is empty and the entry degrades
/// to a plain link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub title: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    #[serde(default)]
    pub items: Vec<NavChild>,
}

impl NavMenu {
    /// The plain-link rendition used when there is nothing to drop down.
    pub fn fallback_link(&self) -> NavLink {
        NavLink {
            title: self.title.clone(),
            target: self.target.clone(),
            icon: self.icon,
        }
    }
}

/// Top-level entry. The renderer matches on the variant; a `Menu` with no
/// items takes the leaf path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NavEntry {
    Link(NavLink),
    Menu(NavMenu),
}

impl NavEntry {
    pub fn link(title: impl Into<String>, target: impl Into<String>, icon: Option<IconRef>) -> Self {
        NavEntry::Link(NavLink {
            title: title.into(),
            target: target.into(),
            icon,
        })
    }

    pub fn menu(
        title: impl Into<String>,
        target: impl Into<String>,
        icon: Option<IconRef>,
        items: Vec<NavChild>,
    ) -> Self {
        NavEntry::Menu(NavMenu {
            title: title.into(),
            target: target.into(),
            icon,
            items,
        })
    }

    /// Child links if this entry actually opens a panel. Empty menus report
    /// `None`: they never transition state and never render an overlay.
    pub fn dropdown_items(&self) -> Option<&[NavChild]> {
        match self {
            NavEntry::Link(_) => None,
            NavEntry::Menu(menu) if menu.items.is_empty() => None,
            NavEntry::Menu(menu) => Some(&menu.items),
        }
    }
}

/// Demo configuration rendered by the web and desktop shells.
pub fn sample_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::menu(
            "Playground",
            "#",
            Some(IconRef::Terminal),
            vec![
                NavChild::new("History", "#"),
                NavChild::new("Starred", "#"),
                NavChild::new("Settings", "#"),
            ],
        ),
        NavEntry::menu(
            "Models",
            "#",
            Some(IconRef::Bot),
            vec![
                NavChild::new("Genesis", "#"),
                NavChild::new("Explorer", "#"),
                NavChild::new("Quantum", "#"),
            ],
        ),
        NavEntry::menu("Settings2", "#", Some(IconRef::Gear), Vec::new()),
        NavEntry::menu(
            "Documentation",
            "#",
            Some(IconRef::BookOpen),
            vec![
                NavChild::new("Introduction", "#"),
                NavChild::new("Get Started", "#"),
                NavChild::new("Tutorials", "#"),
                NavChild::new("Changelog", "#"),
            ],
        ),
        NavEntry::menu(
            "Settings",
            "#",
            Some(IconRef::Gear),
            vec![
                NavChild::new("General", "#"),
                NavChild::new("Team", "#"),
                NavChild::new("Billing", "#"),
                NavChild::new("Limits", "#"),
            ],
        ),
    ]
}
