use dioxus::prelude::*;

use crate::t;

/// Landing page for the demo shells. Static copy; every string funnels
/// through the localization loader so the locale switcher exercises it.
#[component]
pub fn Home() -> Element {
    // Re-render on language change when the platform shares its code signal.
    let _lang = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    println!("[i18n] home render lang={_lang}");

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-tagline-short")} }
            p { {t!("home-intro-1")} }

            ul { class: "page-home__hints",
                li { {t!("home-hint-single")} }
                li { {t!("home-hint-outside")} }
                li { {t!("home-hint-leaf")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
