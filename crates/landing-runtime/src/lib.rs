//! # landing-runtime
//!
//! Plan sources for the landing page.
//!
//! ## Sources
//!
//! - **HTTP** (default): `GET /plans` against the backend, native or wasm32
//! - **Static**: a catalog already held in memory
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landing_runtime::{HttpPlanSource, PlanFetcher};
//!
//! let fetcher = PlanFetcher::new(HttpPlanSource::new("https://example.com"));
//! let state = fetcher.load().await;
//! ```

#[cfg(feature = "http")]
pub mod http;
pub mod memory;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpPlanSource};
pub use memory::StaticPlanSource;

// Re-export core types for convenience
pub use landing_core::{
    LandingError, Plan, PlanFetcher, PlanPrice, PlanSource, PricingState, Result,
};
