//! HTTP Plan Source
//!
//! Implementation of `PlanSource` over the public `GET /plans` endpoint.

use async_trait::async_trait;
use landing_core::{
    error::{LandingError, Result},
    plan::{Plan, PlansResponse},
    source::PlanSource,
};

/// HTTP source configuration
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Origin of the plans API, without the `/plans` path
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
        }
    }
}

impl HttpConfig {
    pub fn from_env() -> Self {
        std::env::var("PLANS_API_URL")
            .map(|base_url| Self { base_url })
            .unwrap_or_default()
    }
}

/// Plans fetched from the backend, unauthenticated and without team scope
pub struct HttpPlanSource {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpPlanSource {
    /// Create a source for the API at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(HttpConfig {
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: HttpConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(HttpConfig::from_env())
    }

    pub fn plans_url(&self) -> String {
        format!("{}/plans", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait(?Send)]
impl PlanSource for HttpPlanSource {
    async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        let url = self.plans_url();
        tracing::debug!(url = %url, "Requesting plans");

        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| LandingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LandingError::Status { code: status.as_u16() });
        }

        let body: PlansResponse = response
            .json()
            .await
            .map_err(|e| LandingError::Decode(e.to_string()))?;

        Ok(body.plans)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_plans_url() {
        assert_eq!(HttpPlanSource::new("https://example.com").plans_url(), "https://example.com/plans");
        assert_eq!(HttpPlanSource::new("https://example.com/").plans_url(), "https://example.com/plans");
        assert_eq!(HttpPlanSource::new("http://localhost:8080/api").plans_url(), "http://localhost:8080/api/plans");
    }
}
