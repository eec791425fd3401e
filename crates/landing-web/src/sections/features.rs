use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::i18n::use_i18n;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <SectionHeader title_key="features-title" />
            <div class="features-grid">
                <FeatureCard icon="💬" title_key="feature-chat-title" body_key="feature-chat-body" />
                <FeatureCard icon="📁" title_key="feature-projects-title" body_key="feature-projects-body" />
                <FeatureCard icon="✨" title_key="feature-ai-title" body_key="feature-ai-body" />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title_key: &'static str, body_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="feature">
            <span class="feature-icon" aria-hidden="true">{icon}</span>
            <h3>{move || i18n.tr(title_key)}</h3>
            <p>{move || i18n.tr(body_key)}</p>
        </div>
    }
}
