use dioxus::prelude::*;

/// Open/close content projection. Children render only while `open`; the
/// wrapper keeps a `data-state` attribute either way so stylesheets can key
/// transitions off it.
#[component]
pub fn Collapsible(open: bool, #[props(into, default)] class: String, children: Element) -> Element {
    let state = if open { "open" } else { "closed" };
    rsx! {
        div {
            class: "collapsible {class}",
            "data-state": state,
            if open {
                {children}
            }
        }
    }
}
