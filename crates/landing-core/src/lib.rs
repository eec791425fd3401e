//! # landing-core
//!
//! Domain logic behind the landing page: the plan catalog contract, the
//! rule that picks the advertised plan, price presentation, localization
//! and fail-closed storage accessors.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       PlanFetcher                             │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  PlanSource  │──▶│ select_plan  │──▶│  PricingState    │  │
//! │  │  (Strategy)  │   │  "premium"?  │   │  + PriceSummary  │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate touches the network or the DOM; the runtime and
//! web crates plug those in through [`PlanSource`] and [`KeyValueStore`].

pub mod error;
pub mod i18n;
pub mod plan;
pub mod pricing;
pub mod source;
pub mod storage;

pub use error::{LandingError, Result};
pub use i18n::{resolve_locale, Locale, Translator};
pub use plan::{select_plan, Plan, PlanPrice, PlansResponse};
pub use pricing::{format_price, subscribe_destination, PriceSummary, PricingState, TrialPreview};
pub use source::{PlanFetcher, PlanSource};
pub use storage::{ChatDetails, KeyValueStore, MemoryStore};

// Fluent argument types, so callers need not depend on fluent-bundle
pub use fluent_bundle::{FluentArgs, FluentValue};
