//! In-Memory Plan Source
//!
//! Serves a fixed catalog. Used for previews and tests, and by anything
//! that already holds the catalog (the plans server parses its file into
//! the same shape).

use async_trait::async_trait;
use landing_core::{
    error::Result,
    plan::{Plan, PlansResponse},
    source::PlanSource,
};

/// Fixed plan catalog
#[derive(Clone, Debug, Default)]
pub struct StaticPlanSource {
    plans: Vec<Plan>,
}

impl StaticPlanSource {
    pub const fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Parse a `{"plans": [...]}` document
    pub fn from_json(json: &str) -> Result<Self> {
        let response: PlansResponse = serde_json::from_str(json)?;
        Ok(Self::new(response.plans))
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }
}

#[async_trait(?Send)]
impl PlanSource for StaticPlanSource {
    async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        Ok(self.plans.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
