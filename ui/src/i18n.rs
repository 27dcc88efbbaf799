//! Localization for the shared UI crate.
//!
//! Fluent bundles are embedded at compile time and resolved through one
//! global loader:
//! - `rust-embed` pulls every `i18n/<lang>/lintel-ui.ftl` into the binary,
//! - `i18n-embed` picks the active language (OS locale list on desktop,
//!   `navigator.languages` on the web),
//! - `i18n-embed-fl`'s `fl!` checks each lookup against the fallback file
//!   at compile time.
//!
//! Only chrome strings are localized: the brand tagline, the switcher label,
//! the submenu toggle hint, and view copy. Menu entry titles are caller data
//! and pass through untranslated.
//!
//! Adding a locale means copying `i18n/en-US/lintel-ui.ftl` to
//! `i18n/<lang-id>/lintel-ui.ftl` and translating the values; message ids
//! and `{ $placeholders }` must stay identical. The key-parity test in
//! `tests/i18n_missing_keys.rs` holds every locale to the fallback's key set.

use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // the t! macro expands to this

/// Shorthand for loader-routed lookups:
///     t!("nav-language-label")
///     t!("nav-submenu-toggle", title = "Models")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Fluent domain; the fallback bundle lives at i18n/en-US/{DOMAIN}.ftl.
const DOMAIN: &str = "lintel-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global loader the `fl!` macro reads from.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the requested languages into the loader. Idempotent; both the app
/// root and the header call this without coordinating.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] locale selection failed ({err}); staying on en-US");
        }
    });
}

/// Switch the active language at runtime.
pub fn set_language(tag: &str) -> Result<(), String> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| format!("unrecognized language tag {tag}"))?;
    i18n_embed::select(&*LOADER, &Localizations, &[lang])
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Language tags with an embedded bundle, sorted. Feeds the locale picker.
pub fn available_languages() -> Vec<String> {
    let tags: BTreeSet<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.into_iter().collect()
}

fn requested_languages() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    {
        i18n_embed::WebLanguageRequester::requested_languages()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        i18n_embed::DesktopLanguageRequester::requested_languages()
    }
}
