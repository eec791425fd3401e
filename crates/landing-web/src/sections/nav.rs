use leptos::prelude::*;

use crate::components::LanguageSwitcher;
use crate::i18n::use_i18n;

#[component]
pub fn Nav() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <nav class="nav">
            <a href="/" class="logo">"Landing"</a>
            <div class="nav-links">
                <a href="#features">{move || i18n.tr("nav-features")}</a>
                <a href="#pricing">{move || i18n.tr("nav-pricing")}</a>
                <a href="/register" class="btn btn-primary">{move || i18n.tr("nav-sign-up")}</a>
                <LanguageSwitcher />
            </div>
        </nav>
    }
}
