//! UI Components

use leptos::prelude::*;

use landing_core::Locale;

use crate::i18n::use_i18n;

/// Loading indicator with a translated screen-reader label
#[component]
pub fn Spinner(label_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner-ring"></span>
            <span class="sr-only">{move || i18n.tr(label_key)}</span>
        </div>
    }
}

/// Translated section heading with optional subtitle
#[component]
pub fn SectionHeader(
    title_key: &'static str,
    #[prop(optional)] subtitle_key: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="section-header">
            <h2 class="section-title">{move || i18n.tr(title_key)}</h2>
            {subtitle_key.map(|key| view! {
                <p class="section-description">{move || i18n.tr(key)}</p>
            })}
        </div>
    }
}

/// EN / PT toggle; persists the choice
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    let option = move |locale: Locale, label: &'static str| {
        let active = {
            let locale = locale.clone();
            move || i18n.locale().is_portuguese() == locale.is_portuguese()
        };

        view! {
            <button
                class="lang-option"
                class:active=active
                on:click=move |_| i18n.set_locale(locale.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="lang-switcher" aria-label=move || i18n.tr("nav-language")>
            {option(Locale::english(), "EN")}
            {option(Locale::portuguese(), "PT")}
        </div>
    }
}
