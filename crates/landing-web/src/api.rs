//! API Client

use landing_core::{PlanFetcher, PricingState};
use landing_runtime::HttpPlanSource;

/// Plans API on the page's own origin
fn plan_source() -> HttpPlanSource {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    HttpPlanSource::new(origin)
}

/// Fetch the catalog once and settle the pricing state.
///
/// Failures go to the browser console and end in `NoPlanAvailable`.
pub async fn load_pricing() -> PricingState {
    let fetcher = PlanFetcher::new(plan_source());

    // The browser has no tracing subscriber; the console is the only channel
    match fetcher.fetch().await {
        Ok(selection) => PricingState::from_selection(selection),
        Err(e) => {
            leptos::logging::warn!("plans unavailable: {e}");
            PricingState::NoPlanAvailable
        }
    }
}
