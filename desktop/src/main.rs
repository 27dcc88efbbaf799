#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::HeaderNav;
use ui::core::menu;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
}

// Shared theme, compiled in. The webview never reads stylesheets off disk.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(launch_config())
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("lintel-desktop was built without the `desktop` feature");
}

#[cfg(feature = "desktop")]
fn launch_config() -> Config {
    let window = WindowBuilder::new()
        .with_title(format!("Lintel – v{}", env!("CARGO_PKG_VERSION")))
        .with_maximized(true);
    Config::new()
        .with_window(window)
        .with_resource_directory(resolve_resource_dir())
}

/// Bundled assets sit next to the executable in release builds; development
/// runs read them straight out of the crate.
#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    } else {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; the header writes it when the user picks a locale.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keying on the language remounts the tree so every localized string
        // re-resolves against the newly selected bundle.
        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

/// Window chrome: the navigation header above routed content.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        HeaderNav { entries: menu::sample_entries() }
        Outlet::<Route> {}
    }
}
