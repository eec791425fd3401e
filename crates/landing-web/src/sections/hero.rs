use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header class="hero">
            <h1>{move || i18n.tr("hero-title")}</h1>
            <p class="tagline">{move || i18n.tr("hero-subtitle")}</p>
            <div class="cta">
                <a href="/register" class="btn btn-primary">{move || i18n.tr("hero-cta-primary")}</a>
                <a href="#pricing" class="btn">{move || i18n.tr("hero-cta-secondary")}</a>
            </div>
        </header>
    }
}
