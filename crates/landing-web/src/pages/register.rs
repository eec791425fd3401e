//! Register Page
//!
//! Destination of the pricing call-to-action.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::sections::{Footer, Nav};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="register">
            <Nav />
            <section class="register-panel">
                <h1>{move || i18n.tr("register-title")}</h1>
                <p>{move || i18n.tr("register-body")}</p>
                <a href="/" class="btn">{move || i18n.tr("register-back")}</a>
            </section>
            <Footer />
        </div>
    }
}
