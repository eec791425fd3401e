use leptos::prelude::*;

use crate::components::SectionHeader;

const INTEGRATIONS: [&str; 6] = ["Google Calendar", "Slack", "GitHub", "GitLab", "Google Drive", "Dropbox"];

#[component]
pub fn Integrations() -> impl IntoView {
    view! {
        <section class="integrations">
            <SectionHeader title_key="integrations-title" subtitle_key="integrations-subtitle" />
            <ul class="integrations-grid">
                {INTEGRATIONS
                    .into_iter()
                    .map(|name| view! { <li class="integration">{name}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
