//! Pricing Section
//!
//! Fetches the plan catalog once on mount and renders the advertised plan.
//! While loading a spinner is shown; without a plan (empty catalog, plan
//! without prices, failed fetch) the section renders nothing at all.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use landing_core::{subscribe_destination, FluentValue, Plan, PriceSummary, PricingState};

use crate::api;
use crate::components::{SectionHeader, Spinner};
use crate::i18n::{fluent_args, use_i18n};

#[component]
pub fn PricingSection() -> impl IntoView {
    let (state, set_state) = signal(PricingState::Loading);

    // No abort on unmount: a late result finds the signal disposed and is dropped
    leptos::task::spawn_local(async move {
        let _ = set_state.try_set(api::load_pricing().await);
    });

    move || match state.get() {
        PricingState::Loading => view! {
            <section id="pricing" class="pricing">
                <Spinner label_key="pricing-loading" />
            </section>
        }
        .into_any(),
        PricingState::NoPlanAvailable => ().into_any(),
        PricingState::PlanReady { plan, summary } => view! {
            <section id="pricing" class="pricing">
                <SectionHeader title_key="pricing-title" subtitle_key="pricing-subtitle" />
                <div class="plans">
                    <PricingCard plan=plan summary=summary />
                </div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn PricingCard(plan: Plan, summary: PriceSummary) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    let PriceSummary {
        price_label,
        interval,
        per_seat_label,
        trial,
        price_id,
    } = summary;

    let members = plan.max_team_members_per_team;
    let projects = plan.max_projects;
    let unlimited_projects = plan.has_unlimited_projects();

    let trial_badge = trial.clone().map(|trial| {
        view! {
            <span class="badge">
                {move || i18n.tr_args("pricing-trial-badge", &fluent_args([("days", FluentValue::from(trial.days))]))}
            </span>
        }
    });

    let after_trial = trial.map(|trial| {
        let interval = interval.clone();
        view! {
            <p class="after-trial">
                {move || i18n.tr_args(
                    "pricing-after-trial",
                    &fluent_args([
                        ("price", FluentValue::from(trial.after_trial_label.clone())),
                        ("interval", FluentValue::from(interval.clone())),
                    ]),
                )}
            </p>
        }
    });

    let per_seat = per_seat_label.map(|label| {
        view! {
            <p class="per-seat">
                {move || i18n.tr_args("pricing-per-seat", &fluent_args([("price", FluentValue::from(label.clone()))]))}
            </p>
        }
    });

    let per_interval = move || {
        i18n.tr_args("pricing-per-interval", &fluent_args([("interval", FluentValue::from(interval.clone()))]))
    };

    let projects_line = move || {
        if unlimited_projects {
            i18n.tr("pricing-projects-unlimited")
        } else {
            i18n.tr_args("pricing-projects", &fluent_args([("count", FluentValue::from(projects))]))
        }
    };

    // The price id is kept for the checkout flow; the route ignores it for now
    let subscribe = move |_| {
        navigate(subscribe_destination(&price_id), Default::default());
    };

    view! {
        <div class="plan featured">
            {trial_badge}
            <h3>{plan.display_name}</h3>
            <p class="description">{plan.description}</p>
            <div class="price">
                {price_label}
                " "
                <span>{per_interval}</span>
            </div>
            {per_seat}
            {after_trial}
            <ul>
                <li>
                    {move || i18n.tr_args("pricing-team-members", &fluent_args([("count", FluentValue::from(members))]))}
                </li>
                <li>{projects_line}</li>
            </ul>
            <button class="btn btn-primary" on:click=subscribe>
                {move || i18n.tr("pricing-subscribe")}
            </button>
        </div>
    }
}
