//! Open/close state for the header navigation dropdowns.
//!
//! Model
//! -----
//! The strip holds exactly one `OpenDropdown` value: the title of the entry
//! whose panel is currently expanded, or nothing. At most one panel is ever
//! open; opening a second entry *replaces* the first rather than stacking,
//! so the invariant needs no bookkeeping beyond the single optional title.
//!
//! Transitions
//! -----------
//! - `toggle(title, true)` opens `title`, implicitly closing whatever else
//!   was open.
//! - `toggle(title, false)` closes `title` only if it is the one open;
//!   a stale close request for some other entry is ignored.
//! - `close_all()` clears unconditionally. Fired by outside pointer-downs
//!   and by selecting a child link.
//!
//! The value lives in a `Signal` owned by `NavHorizontal` and is handed to
//! entry renderers read-plus-callback; nothing else writes it. Entry titles
//! double as keys, so callers must keep top-level titles unique. With
//! duplicates the entries shadow each other and both render as open.

/// Which dropdown panel is expanded, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDropdown(Option<String>);

impl OpenDropdown {
    /// True if `title`'s panel is the open one.
    pub fn is_open(&self, title: &str) -> bool {
        self.0.as_deref() == Some(title)
    }

    /// True if any panel is open.
    pub fn any_open(&self) -> bool {
        self.0.is_some()
    }

    /// Apply a toggle request from one entry's trigger.
    ///
    /// Opening replaces the current value outright, which is what keeps at
    /// most one panel open. Closing only takes effect when `title` is the
    /// entry actually holding the panel.
    pub fn toggle(&mut self, title: &str, want_open: bool) {
        if want_open {
            self.0 = Some(title.to_string());
        } else if self.is_open(title) {
            self.0 = None;
        }
    }

    /// Close whatever is open. Safe to call when nothing is.
    pub fn close_all(&mut self) {
        self.0 = None;
    }
}
