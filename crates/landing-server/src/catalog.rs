//! Plan Catalog
//!
//! The plans the API advertises, loaded once at startup.

use std::path::Path;

use landing_core::{
    error::{LandingError, Result},
    plan::{Plan, PlanPrice, PlansResponse, UNLIMITED_PROJECTS},
};

/// Immutable list of plans served by `GET /plans`
#[derive(Clone, Debug, Default)]
pub struct PlanCatalog {
    response: PlansResponse,
}

impl PlanCatalog {
    pub const fn new(plans: Vec<Plan>) -> Self {
        Self {
            response: PlansResponse { plans },
        }
    }

    /// Parse a `{"plans": [...]}` document
    pub fn from_json(json: &str) -> Result<Self> {
        let response: PlansResponse = serde_json::from_str(json)?;
        Ok(Self { response })
    }

    /// Load from `path`, or fall back to the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };

        let json = std::fs::read_to_string(path).map_err(|e| {
            LandingError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        Self::from_json(&json)
    }

    /// Default catalog: basic, premium and enterprise tiers in USD
    pub fn builtin() -> Self {
        Self::new(vec![
            tier("basic", "Basic", "For individuals getting started", 1, 3, monthly(900, 0, "price_basic_monthly", 0)),
            tier(
                "premium",
                "Premium",
                "Everything a growing team needs",
                10,
                UNLIMITED_PROJECTS,
                monthly(1999, 500, "price_premium_monthly", 7),
            ),
            tier(
                "enterprise",
                "Enterprise",
                "Dedicated support and custom limits",
                100,
                UNLIMITED_PROJECTS,
                monthly(9900, 800, "price_enterprise_monthly", 14),
            ),
        ])
    }

    pub fn plans(&self) -> &[Plan] {
        &self.response.plans
    }

    pub const fn response(&self) -> &PlansResponse {
        &self.response
    }
}

fn tier(
    code: &str,
    display_name: &str,
    description: &str,
    members: i64,
    projects: i64,
    price: PlanPrice,
) -> Plan {
    Plan {
        code: code.into(),
        display_name: display_name.into(),
        description: description.into(),
        max_team_members_per_team: members,
        max_projects: projects,
        prices: vec![price],
    }
}

fn monthly(amount_cents: i64, per_seat_amount_cents: i64, price_id: &str, trial_days: i64) -> PlanPrice {
    PlanPrice {
        nickname: "monthly".into(),
        amount_cents,
        per_seat_amount_cents,
        currency: "usd".into(),
        interval: "month".into(),
        stripe_price_id: price_id.into(),
        eligible_trial_days: trial_days,
        has_trial_available: Some(trial_days > 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::select_plan;

    #[test]
    fn test_builtin_catalog_features_premium() {
        let catalog = PlanCatalog::builtin();
        assert_eq!(catalog.plans().len(), 3);

        let selected = select_plan(catalog.plans().to_vec()).unwrap();
        assert_eq!(selected.code, "premium");
        assert!(selected.is_offered());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let catalog = PlanCatalog::load(None).unwrap();
        assert_eq!(catalog.plans().len(), PlanCatalog::builtin().plans().len());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlanCatalog::load(Some(Path::new("/nonexistent/plans.json"))).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn test_from_json() {
        let catalog = PlanCatalog::from_json(r#"{"plans":[{"code":"solo"}]}"#).unwrap();
        assert_eq!(catalog.plans()[0].code, "solo");

        assert!(PlanCatalog::from_json("not json").is_err());
    }
}
