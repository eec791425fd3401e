use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::i18n::use_i18n;

/// (figure, label key)
const STATS: [(&str, &str); 3] = [
    ("12k+", "stats-teams"),
    ("40M", "stats-messages"),
    ("99.9%", "stats-uptime"),
];

#[component]
pub fn Statistics() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="statistics">
            <SectionHeader title_key="stats-title" />
            <dl class="stats-grid">
                {STATS
                    .into_iter()
                    .map(|(figure, key)| view! {
                        <div class="stat">
                            <dt>{figure}</dt>
                            <dd>{move || i18n.tr(key)}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
