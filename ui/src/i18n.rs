//! Internationalization (i18n) support for `vitrine-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vitrine-ui.ftl   (fallback/reference)
//!   ar/vitrine-ui.ftl      (Arabic, right-to-left)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::i18n::init;
//! use crate::t;
//! init(); // idempotent
//! let home_label = t!("nav-home");
//! ```
//!
//! Text that may come from the CMS instead of the bundle goes through
//! [`tr`], which falls back to the raw string when no message matches.
//!
//! Direction:
//! - [`is_rtl_language`] decides from the primary language subtag.
//! - [`TextDirection::of`] maps a tag to its direction; the
//!   root element's `dir` attribute and every carousel follow it.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` feature in the target-specific dependency section).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("carousel-go-to-page", page = 2)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "vitrine-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Primary subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("i18n: failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    debug!(language = tag, "i18n: language switched");
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the active bundle, e.g. `en-US` or `ar`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Native display name for the locale switcher.
pub fn language_display_name(tag: &str) -> &str {
    match primary_subtag(tag) {
        "ar" => "العربية",
        "en" => "English",
        _ => tag,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn of(tag: &str) -> Self {
        if is_rtl_language(tag) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir_attr(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

pub fn is_rtl_language(tag: &str) -> bool {
    RTL_LANGUAGES.contains(&primary_subtag(tag))
}

/// Active language tag, subscribing the calling component to the global
/// language signal when the platform provides one.
pub fn use_language() -> String {
    let code: Option<dioxus::prelude::Signal<String>> = dioxus::prelude::try_use_context();
    code.map(|code| code()).unwrap_or_else(current_language)
}

/// Look up `key_or_text` as a message id; CMS text that is not an id is
/// returned unchanged.
pub fn tr(key_or_text: &str) -> String {
    if LOADER.has(key_or_text) {
        LOADER.get(key_or_text)
    } else {
        key_or_text.to_string()
    }
}

/// Language part of a tag: `ar` for `ar-SA`, `en` for `en_US`.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
