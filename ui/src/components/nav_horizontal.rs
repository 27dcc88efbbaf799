use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{Collapsible, Icon};
use crate::core::dismiss::DismissGuard;
use crate::core::dropdown::OpenDropdown;
use crate::core::menu::{IconRef, NavChild, NavEntry, NavLink, NavMenu};
use crate::t;

/// DOM id of the strip; outside-pointer containment is resolved against
/// this element's subtree.
const NAV_CONTAINER_ID: &str = "nav-horizontal";

/// Horizontal navigation strip. Owns the single open-dropdown value plus
/// the outside-pointer dismissal resource, and renders each entry in order.
///
/// Entries are read-only configuration; interaction flows back only as
/// open/close transitions on the shared state.
#[component]
pub fn NavHorizontal(entries: Vec<NavEntry>) -> Element {
    let mut open = use_signal(OpenDropdown::default);

    // Web installs a document-level pointerdown listener scoped to this
    // component's lifetime. The guard lives in a slot that `use_drop` empties
    // on unmount, which removes the listener.
    let guard_slot: Rc<RefCell<Option<DismissGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));
    {
        let guard_slot = guard_slot.clone();
        use_effect(move || {
            if !DismissGuard::SUPPORTED || guard_slot.borrow().is_some() {
                return;
            }
            let installed = DismissGuard::install(NAV_CONTAINER_ID, move || {
                open.with_mut(|dropdown| dropdown.close_all());
            });
            match installed {
                Ok(guard) => {
                    guard_slot.borrow_mut().replace(guard);
                }
                Err(err) => eprintln!("[nav] outside-pointer dismissal unavailable: {err}"),
            }
        });
    }
    {
        let guard_slot = guard_slot.clone();
        use_drop(move || {
            guard_slot.borrow_mut().take();
        });
    }

    // Targets without the document listener get a scrim behind the strip
    // while a panel is open; pointer-downs on it close the panel. The strip
    // sits above the scrim, so trigger clicks keep their own intent.
    let scrim_open = !DismissGuard::SUPPORTED && open().any_open();

    rsx! {
        if scrim_open {
            div {
                class: "nav-menu__scrim",
                onpointerdown: move |_| open.with_mut(|dropdown| dropdown.close_all()),
            }
        }
        nav {
            id: NAV_CONTAINER_ID,
            class: "navbar__links",
            aria_label: t!("nav-landmark-label"),
            for entry in entries.iter() {
                {render_entry(entry, open)}
            }
        }
    }
}

/// Dispatch one entry to its render path. `dropdown_items` decides leaf vs
/// panel, so menus without items degrade to the plain-link path and the
/// overlay machinery only runs for real children.
fn render_entry(entry: &NavEntry, open: Signal<OpenDropdown>) -> Element {
    match entry {
        NavEntry::Link(link) => render_leaf(link.clone()),
        NavEntry::Menu(menu) if entry.dropdown_items().is_none() => {
            render_leaf(menu.fallback_link())
        }
        NavEntry::Menu(menu) => render_menu(menu.clone(), open),
    }
}

fn render_leaf(link: NavLink) -> Element {
    rsx! {
        a {
            key: "{link.title}",
            class: "navbar__link",
            href: "{link.target}",
            if let Some(icon) = link.icon {
                Icon { icon }
            }
            span { class: "navbar__link-label", "{link.title}" }
        }
    }
}

fn render_menu(menu: NavMenu, mut open: Signal<OpenDropdown>) -> Element {
    let is_open = open().is_open(&menu.title);
    let state = if is_open { "open" } else { "closed" };
    let expanded = if is_open { "true" } else { "false" };
    let toggle_hint = t!("nav-submenu-toggle", title = menu.title.as_str());
    let toggle_title = menu.title.clone();

    rsx! {
        div {
            key: "{menu.title}",
            class: "nav-menu",
            "data-state": state,
            button {
                r#type: "button",
                class: "nav-menu__trigger",
                aria_expanded: expanded,
                title: "{toggle_hint}",
                onclick: move |_| {
                    #[cfg(debug_assertions)]
                    println!("[nav] toggle {toggle_title} -> {}", !is_open);
                    open.with_mut(|dropdown| dropdown.toggle(&toggle_title, !is_open));
                },
                if let Some(icon) = menu.icon {
                    Icon { icon }
                }
                span { class: "nav-menu__label", "{menu.title}" }
                Icon { icon: IconRef::ChevronDown, class: "nav-menu__chevron" }
            }
            Collapsible { open: is_open, class: "nav-menu__panel",
                {menu.items.iter().map(|item| render_panel_item(item.clone(), open))}
            }
        }
    }
}

fn render_panel_item(item: NavChild, mut open: Signal<OpenDropdown>) -> Element {
    rsx! {
        a {
            key: "{item.title}",
            class: "nav-menu__item",
            href: "{item.target}",
            // Selection clears the panel; navigation then proceeds normally.
            onclick: move |_| open.with_mut(|dropdown| dropdown.close_all()),
            "{item.title}"
        }
    }
}
