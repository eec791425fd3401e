//! Localization Context
//!
//! The language is resolved once at startup, then travels through the
//! Leptos context. Changing it persists the preference.

use leptos::prelude::*;

use landing_core::{
    i18n::{resolve_locale, Locale, Translator},
    storage::{load_language, save_language},
    FluentArgs, FluentValue,
};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct I18n {
    translator: StoredValue<Translator>,
    locale: RwSignal<Locale>,
}

impl I18n {
    fn init() -> Self {
        let saved = load_language(&BrowserStorage::local());
        let runtime = web_sys::window().and_then(|w| w.navigator().language());

        Self {
            translator: StoredValue::new(Translator::new()),
            locale: RwSignal::new(resolve_locale(saved.as_deref(), runtime.as_deref())),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Reactive translation; re-runs when the locale changes
    pub fn tr(&self, key: &str) -> String {
        let locale = self.locale.get();
        self.translator.with_value(|t| t.tr(&locale, key))
    }

    pub fn tr_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        let locale = self.locale.get();
        self.translator.with_value(|t| t.tr_args(&locale, key, Some(args)))
    }

    pub fn set_locale(&self, locale: Locale) {
        save_language(&BrowserStorage::local(), locale.as_str());
        self.locale.set(locale);
    }
}

pub fn provide_i18n() {
    provide_context(I18n::init());
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

/// Build Fluent arguments from name/value pairs
pub fn fluent_args<const N: usize>(pairs: [(&'static str, FluentValue<'static>); N]) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    for (name, value) in pairs {
        args.set(name, value);
    }
    args
}
