use dioxus::prelude::*;

use ui::components::HeaderNav;
use ui::core::menu;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; the header writes it when the user picks a locale.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keying on the language remounts the tree so every localized string
        // re-resolves against the newly selected bundle.
        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

/// Page chrome: the navigation header above routed content.
#[component]
fn WebShell() -> Element {
    rsx! {
        HeaderNav { entries: menu::sample_entries() }
        Outlet::<Route> {}
    }
}
