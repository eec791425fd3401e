//! Localization
//!
//! Language resolution and embedded Fluent bundles. English is the
//! reference bundle: any key missing from the active bundle is looked up
//! there before giving up and returning the key itself.

use std::fmt;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

const EN_FTL: &str = include_str!("../locales/en.ftl");
const PT_FTL: &str = include_str!("../locales/pt.ftl");

/// Active UI language, kept verbatim ("en", "pt", "pt-BR")
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    pub fn english() -> Self {
        Self("en".into())
    }

    pub fn portuguese() -> Self {
        Self("pt".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_portuguese(&self) -> bool {
        self.0.starts_with("pt")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the UI language.
///
/// 1. A saved preference equal to `"en"` or starting with `"pt"`
/// 2. The runtime language when it starts with `"pt"`, region kept
/// 3. English
pub fn resolve_locale(saved: Option<&str>, runtime: Option<&str>) -> Locale {
    if let Some(saved) = saved {
        if saved == "en" || saved.starts_with("pt") {
            return Locale(saved.to_string());
        }
    }

    match runtime {
        Some(lang) if lang.starts_with("pt") => Locale(lang.to_string()),
        _ => Locale::english(),
    }
}

/// English and Portuguese message bundles
pub struct Translator {
    en: FluentBundle<FluentResource>,
    pt: FluentBundle<FluentResource>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self {
            en: build_bundle(langid!("en"), EN_FTL),
            pt: build_bundle(langid!("pt"), PT_FTL),
        }
    }

    /// Translate a message without arguments
    pub fn tr(&self, locale: &Locale, key: &str) -> String {
        self.tr_args(locale, key, None)
    }

    /// Translate a message, English first as fallback, then the key
    pub fn tr_args(&self, locale: &Locale, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let active = if locale.is_portuguese() { &self.pt } else { &self.en };

        format_message(active, key, args)
            .or_else(|| format_message(&self.en, key, args))
            .unwrap_or_else(|| {
                tracing::debug!(key = %key, locale = %locale, "Missing translation");
                key.to_string()
            })
    }
}

fn build_bundle(lang: LanguageIdentifier, source: &str) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(lang = %lang, errors = errors.len(), "Locale file has syntax errors");
        partial
    });

    let mut bundle = FluentBundle::new_concurrent(vec![lang]);
    bundle.set_use_isolating(false);
    bundle.add_resource_overriding(resource);
    bundle
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs<'_>>,
) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;

    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);

    errors.is_empty().then(|| value.into_owned())
}
