//! Plan Source Strategy Pattern
//!
//! The pricing section does not care where plans come from: the browser
//! fetches them over HTTP, tests and the server hand them over in memory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landing_core::{PlanFetcher, PricingState};
//!
//! let fetcher = PlanFetcher::new(HttpPlanSource::new("https://example.com"));
//! let state: PricingState = fetcher.load().await;
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::plan::{select_plan, Plan};
use crate::pricing::PricingState;

/// Where the plan catalog comes from.
///
/// Futures are not `Send` so implementations can run on the browser's
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait PlanSource {
    /// List every plan, in catalog order
    async fn fetch_plans(&self) -> Result<Vec<Plan>>;

    /// Source name, for diagnostics
    fn name(&self) -> &str;
}

/// Fetches the catalog once and picks the plan to advertise
pub struct PlanFetcher<S> {
    source: S,
}

impl<S: PlanSource> PlanFetcher<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and select, surfacing failures to the caller
    pub async fn fetch(&self) -> Result<Option<Plan>> {
        let plans = self.source.fetch_plans().await?;

        tracing::debug!(source = self.source.name(), count = plans.len(), "Fetched plans");

        Ok(select_plan(plans))
    }

    /// Fetch, select and settle the render state; never fails
    pub async fn load(&self) -> PricingState {
        PricingState::resolve(self.fetch().await)
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}
