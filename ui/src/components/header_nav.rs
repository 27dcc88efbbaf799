use dioxus::prelude::*;

use crate::components::NavHorizontal;
use crate::core::menu::NavEntry;
use crate::i18n::{self};
use crate::t;

// Navbar stylesheet (asset pipeline everywhere, additionally inlined in
// release native where the resolver may miss bundled assets)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Header shell: brand block, the horizontal menu strip, and a locale
/// switcher when more than one translation is embedded.
///
/// `entries` is static configuration owned by the caller; the shell hands it
/// to `NavHorizontal` untouched. Picking a locale loads the new bundle, then
/// updates the shared language signal (when the platform provided one) so the
/// surrounding app can remount and re-pull every `fl!` string.
#[component]
pub fn HeaderNav(entries: Vec<NavEntry>) -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Seed the select from the shared code so it survives the keyed remount
    // the platforms perform on language change.
    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .as_ref()
            .map(|code| code.peek().clone())
            .unwrap_or_else(|| "en-US".to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    // Reading the shared signal here subscribes the header even on platforms
    // that embed it without the remount wrapper.
    let lang_attr = match lang_code_ctx.as_ref() {
        Some(code) => code(),
        None => current_lang(),
    };

    #[cfg(debug_assertions)]
    println!("[i18n] header render lang={lang_attr}");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let picked = evt.value();
        if i18n::set_language(&picked).is_err() {
            return;
        }
        current_lang.set(picked.clone());
        if let Some(mut shared) = lang_code_ctx {
            shared.set(picked);
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            lang: "{lang_attr}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: "/",
                        span { class: "navbar__brand-beam", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Lintel" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                NavHorizontal { entries }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
