use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <footer class="footer">
            <p>{move || i18n.tr("footer-rights")}</p>
        </footer>
    }
}
