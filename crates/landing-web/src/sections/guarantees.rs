use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::i18n::use_i18n;

const GUARANTEES: [(&str, &str); 3] = [
    ("🔒", "guarantee-security"),
    ("🤝", "guarantee-support"),
    ("↩", "guarantee-cancel"),
];

#[component]
pub fn Guarantees() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="guarantees">
            <SectionHeader title_key="guarantees-title" />
            <ul class="guarantees-list">
                {GUARANTEES
                    .into_iter()
                    .map(|(icon, key)| view! {
                        <li>
                            <span aria-hidden="true">{icon}</span>
                            " "
                            {move || i18n.tr(key)}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
