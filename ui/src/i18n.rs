//! Internationalization (i18n) support for `ictstat-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading per language)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/ictstat-ui.ftl   (fallback/reference)
//!   lv-LV/ictstat-ui.ftl   (Latvian)
//! ```
//!
//! Unlike a single global loader that is switched at runtime, every supported
//! language owns its own `FluentLanguageLoader`. Lookups always name the
//! language explicitly, so the active language lives in the dashboard state and
//! nowhere else:
//! ```ignore
//! use crate::i18n::Language;
//! use crate::t;
//! let title = t!(Language::Lv, "profits-label", year = "2022");
//! ```
//!
//! Public API surface:
//! - `Language` – the two dashboard languages and their persisted codes.
//! - `text(lang, key)` / `text_args(lang, key, args)` – lookups.
//! - `t!` – ergonomic wrapper around both.
//! - `available_languages()` – embedded locale folders (used by tests).
use std::collections::HashMap;

use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Translation macro taking the language explicitly.
/// Examples:
///     t!(lang, "page-title")
///     t!(lang, "profits-label", year = "2023")
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::text($lang, $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::text_args(
            $lang,
            $key,
            &[ $( (stringify!($arg), ::std::string::ToString::to_string(&$value)) ),+ ],
        )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "ictstat-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two languages the dashboard ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Lv,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Lv];

    /// Short code persisted in the preference store.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lv => "lv",
        }
    }

    /// Strict parse of a persisted code; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "lv" => Some(Language::Lv),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Lv,
            Language::Lv => Language::En,
        }
    }

    /// Locale folder holding this language's bundle.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Lv => "lv-LV",
        }
    }

    fn identifier(self) -> LanguageIdentifier {
        self.tag().parse().expect("valid language identifier")
    }
}

struct Localizer {
    en: FluentLanguageLoader,
    lv: FluentLanguageLoader,
}

impl Localizer {
    fn loader(&self, lang: Language) -> &FluentLanguageLoader {
        match lang {
            Language::En => &self.en,
            Language::Lv => &self.lv,
        }
    }
}

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::En.identifier());
    // Substituted years and amounts must render without bidi isolation marks.
    loader.set_use_isolating(false);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        tracing::warn!(lang = lang.tag(), %err, "[i18n] failed selecting language; continuing with fallback");
    }
    loader
}

static LOCALIZER: Lazy<Localizer> = Lazy::new(|| Localizer {
    en: build_loader(Language::En),
    lv: build_loader(Language::Lv),
});

/// Plain lookup. Missing keys fall back to English, then to the key itself.
pub fn text(lang: Language, key: &str) -> String {
    LOCALIZER.loader(lang).get(key)
}

/// Lookup with named parameters substituted into the template.
pub fn text_args(lang: Language, key: &str, args: &[(&str, String)]) -> String {
    let args: HashMap<&str, FluentValue<'_>> = args
        .iter()
        .map(|(name, value)| (*name, FluentValue::from(value.as_str())))
        .collect();
    LOCALIZER.loader(lang).get_args(key, args)
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
