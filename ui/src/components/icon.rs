use dioxus::prelude::*;

use crate::core::menu::IconRef;

/// Inline SVG glyph in the 24x24 stroked-outline style. Decorative only;
/// adjacent text carries the accessible name.
#[component]
pub fn Icon(icon: IconRef, #[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph(icon)}
        }
    }
}

fn glyph(icon: IconRef) -> Element {
    match icon {
        IconRef::Terminal => rsx! {
            path { d: "m7 11 2-2-2-2" }
            path { d: "M11 13h4" }
            rect { width: "18", height: "18", x: "3", y: "3", rx: "2" }
        },
        IconRef::Bot => rsx! {
            path { d: "M12 8V4H8" }
            rect { width: "16", height: "12", x: "4", y: "8", rx: "2" }
            path { d: "M2 14h2" }
            path { d: "M20 14h2" }
            path { d: "M15 13v2" }
            path { d: "M9 13v2" }
        },
        IconRef::BookOpen => rsx! {
            path { d: "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" }
        },
        IconRef::Gear => rsx! {
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
        IconRef::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No hooks and no handlers, so the node tree can be built outside a runtime.
    #[test]
    fn every_glyph_renders_nodes() {
        for icon in [
            IconRef::Terminal,
            IconRef::Bot,
            IconRef::BookOpen,
            IconRef::Gear,
            IconRef::ChevronDown,
        ] {
            let rendered = Icon(IconProps::builder().icon(icon).build());
            assert!(rendered.is_ok());
        }
    }
}
