//! Plan Catalog Model
//!
//! Wire types for the `GET /plans` contract and the rule that picks the
//! single plan advertised on the landing page.

use serde::{Deserialize, Deserializer, Serialize};

/// Code of the plan the landing page advertises when present
pub const FEATURED_PLAN_CODE: &str = "premium";

/// Trial length assumed when the backend omits `eligible_trial_days`
pub const DEFAULT_TRIAL_DAYS: i64 = 7;

/// `max_projects` value meaning "no limit"
pub const UNLIMITED_PROJECTS: i64 = -1;

/// Body of a `GET /plans` response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlansResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<Plan>,
}

/// A subscription tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable identifier ("basic", "premium", ...)
    pub code: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_team_members_per_team: i64,

    /// `-1` means unlimited
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_projects: i64,

    /// Billing configurations, in backend order
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<PlanPrice>,
}

impl Plan {
    /// Minimal plan with only a code, mostly useful for fixtures
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: String::new(),
            description: String::new(),
            max_team_members_per_team: 0,
            max_projects: 0,
            prices: Vec::new(),
        }
    }

    /// A plan without prices cannot be bought, so it is not shown
    pub fn is_offered(&self) -> bool {
        !self.prices.is_empty()
    }

    /// Price the landing page presents
    pub fn primary_price(&self) -> Option<&PlanPrice> {
        self.prices.first()
    }

    pub const fn has_unlimited_projects(&self) -> bool {
        self.max_projects == UNLIMITED_PROJECTS
    }
}

/// A billing configuration under a plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub amount_cents: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub per_seat_amount_cents: i64,

    /// ISO currency code, any case
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,

    /// Billing interval as sent by the backend ("month", "year")
    #[serde(default, deserialize_with = "null_as_default")]
    pub interval: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stripe_price_id: String,

    #[serde(default = "default_trial_days", deserialize_with = "null_as_trial_days")]
    pub eligible_trial_days: i64,

    /// Raw flag; use [`PlanPrice::has_trial_available`] to read it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_trial_available: Option<bool>,
}

const fn default_trial_days() -> i64 {
    DEFAULT_TRIAL_DAYS
}

/// `null` decodes like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_trial_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(DEFAULT_TRIAL_DAYS))
}

impl PlanPrice {
    /// Trial availability, defaulting to `eligible_trial_days > 0` when omitted
    pub fn has_trial_available(&self) -> bool {
        self.has_trial_available
            .unwrap_or(self.eligible_trial_days > 0)
    }

    /// Whether the trial badge and post-trial preview are rendered
    pub fn shows_trial(&self) -> bool {
        self.has_trial_available() && self.eligible_trial_days > 0
    }
}

/// Pick the plan to advertise: the featured code, else the first plan.
pub fn select_plan(plans: Vec<Plan>) -> Option<Plan> {
    let featured = plans.iter().position(|p| p.code == FEATURED_PLAN_CODE);
    let mut plans = plans.into_iter();

    match featured {
        Some(index) => plans.nth(index),
        None => plans.next(),
    }
}
