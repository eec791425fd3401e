//! Pricing Presentation
//!
//! Turns the selected [`Plan`] into what the pricing card renders and
//! models the mount-time state machine of the pricing section:
//!
//! ```text
//! Loading ──(plan found)──────────────▶ PlanReady
//!    │
//!    ├──(no plan / empty prices)──────▶ NoPlanAvailable
//!    └──(fetch failed)────────────────▶ NoPlanAvailable
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::{Plan, PlanPrice};

/// Shown instead of a zero or negative amount so a misconfigured price
/// never looks free.
pub const FALLBACK_PRICE_CENTS: i64 = 50_000;

/// Route the subscribe action leads to
pub const REGISTER_ROUTE: &str = "/register";

/// Format an amount in cents as `"<CURRENCY> <units>.<cents>"`.
///
/// No symbols or locale grouping: `format_price(1999, "usd") == "USD 19.99"`.
pub fn format_price(cents: i64, currency: &str) -> String {
    let cents = if cents <= 0 { FALLBACK_PRICE_CENTS } else { cents };
    let amount = Decimal::new(cents, 2);

    format!("{} {:.2}", currency.to_uppercase(), amount)
}

/// Destination of the subscribe call-to-action.
///
/// The price identifier is accepted for a future checkout flow but does
/// not change the route yet.
pub fn subscribe_destination(price_id: &str) -> &'static str {
    tracing::debug!(price_id = %price_id, "Subscribe requested");
    REGISTER_ROUTE
}

/// Trial disclosure for a price that offers one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialPreview {
    pub days: i64,

    /// What the customer pays once the trial ends
    pub after_trial_label: String,
}

/// Everything the pricing card shows about one price
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub price_label: String,
    pub interval: String,
    pub per_seat_label: Option<String>,
    pub trial: Option<TrialPreview>,

    /// Opaque token handed to the subscribe action
    pub price_id: String,
}

impl PriceSummary {
    pub fn from_price(price: &PlanPrice) -> Self {
        let price_label = format_price(price.amount_cents, &price.currency);

        let per_seat_label = (price.per_seat_amount_cents > 0)
            .then(|| format_price(price.per_seat_amount_cents, &price.currency));

        let trial = price.shows_trial().then(|| TrialPreview {
            days: price.eligible_trial_days,
            after_trial_label: price_label.clone(),
        });

        Self {
            price_label,
            interval: price.interval.clone(),
            per_seat_label,
            trial,
            price_id: price.stripe_price_id.clone(),
        }
    }
}

/// Render state of the pricing section
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PricingState {
    /// Fetch in flight; a spinner is shown
    #[default]
    Loading,

    /// Nothing to advertise; the section renders nothing
    NoPlanAvailable,

    /// A plan with at least one price is ready to render
    PlanReady {
        plan: Plan,
        summary: PriceSummary,
    },
}

impl PricingState {
    /// Settle the state from the outcome of the mount-time fetch.
    ///
    /// Failures are logged and degrade to [`PricingState::NoPlanAvailable`].
    pub fn resolve(outcome: Result<Option<Plan>>) -> Self {
        match outcome {
            Ok(selection) => Self::from_selection(selection),
            Err(e) => {
                tracing::warn!(error = %e, retryable = e.is_retryable(), "Failed to fetch plans");
                Self::NoPlanAvailable
            }
        }
    }

    /// Settle the state from a successful fetch.
    ///
    /// Callers that report failures on their own channel use this and map
    /// errors to [`PricingState::NoPlanAvailable`] themselves.
    pub fn from_selection(selection: Option<Plan>) -> Self {
        let Some(plan) = selection else {
            tracing::debug!("Plans catalog is empty");
            return Self::NoPlanAvailable;
        };

        let Some(price) = plan.primary_price() else {
            tracing::debug!(plan = %plan.code, "Selected plan has no prices");
            return Self::NoPlanAvailable;
        };

        let summary = PriceSummary::from_price(price);
        Self::PlanReady { plan, summary }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn plan(&self) -> Option<&Plan> {
        match self {
            Self::PlanReady { plan, .. } => Some(plan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandingError;
    use rust_decimal_macros::dec;

    fn price(json: &str) -> PlanPrice {
        serde_json::from_str(json).unwrap()
    }

    fn plan_with(prices: Vec<PlanPrice>) -> Plan {
        let mut plan = Plan::with_code("premium");
        plan.prices = prices;
        plan
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1999, "usd"), "USD 19.99");
        assert_eq!(format_price(1, "eur"), "EUR 0.01");
        assert_eq!(format_price(100, "BRL"), "BRL 1.00");
        assert_eq!(format_price(123_456_789, "usd"), "USD 1234567.89");
    }

    #[test]
    fn test_format_price_guards_non_positive() {
        assert_eq!(format_price(0, "usd"), "USD 500.00");
        assert_eq!(format_price(-1, "usd"), "USD 500.00");
        assert_eq!(format_price(i64::MIN, "brl"), "BRL 500.00");
        assert_eq!(Decimal::new(FALLBACK_PRICE_CENTS, 2), dec!(500.00));
    }

    #[test]
    fn test_summary_with_trial() {
        let summary = PriceSummary::from_price(&price(
            r#"{"amount_cents":2900,"currency":"usd","interval":"month","stripe_price_id":"price_123"}"#,
        ));

        assert_eq!(summary.price_label, "USD 29.00");
        assert_eq!(summary.interval, "month");
        assert_eq!(summary.price_id, "price_123");
        assert_eq!(
            summary.trial,
            Some(TrialPreview { days: 7, after_trial_label: "USD 29.00".into() })
        );
        assert!(summary.per_seat_label.is_none());
    }

    #[test]
    fn test_summary_without_trial() {
        let summary = PriceSummary::from_price(&price(
            r#"{"amount_cents":2900,"per_seat_amount_cents":500,"currency":"usd","eligible_trial_days":0}"#,
        ));

        assert!(summary.trial.is_none());
        assert_eq!(summary.per_seat_label.as_deref(), Some("USD 5.00"));
    }

    #[test]
    fn test_state_transitions() {
        assert!(PricingState::default().is_loading());

        let ready = PricingState::resolve(Ok(Some(plan_with(vec![price(r#"{"amount_cents":1999}"#)]))));
        assert_eq!(ready.plan().map(|p| p.code.as_str()), Some("premium"));

        assert_eq!(PricingState::resolve(Ok(None)), PricingState::NoPlanAvailable);
        assert_eq!(PricingState::resolve(Ok(Some(plan_with(vec![])))), PricingState::NoPlanAvailable);
        assert_eq!(
            PricingState::resolve(Err(LandingError::Network("offline".into()))),
            PricingState::NoPlanAvailable
        );
    }

    #[test]
    fn test_from_selection_matches_resolve() {
        let plan = plan_with(vec![price(r#"{"amount_cents":1999,"currency":"usd"}"#)]);

        assert_eq!(
            PricingState::from_selection(Some(plan.clone())),
            PricingState::resolve(Ok(Some(plan)))
        );
        assert_eq!(PricingState::from_selection(None), PricingState::NoPlanAvailable);
        assert_eq!(
            PricingState::from_selection(Some(plan_with(vec![]))),
            PricingState::NoPlanAvailable
        );
    }

    #[test]
    fn test_subscribe_ignores_price_id() {
        assert_eq!(subscribe_destination("price_123"), "/register");
        assert_eq!(subscribe_destination(""), REGISTER_ROUTE);
    }
}
