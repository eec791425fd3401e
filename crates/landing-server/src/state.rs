//! Application State

use std::sync::Arc;

use crate::catalog::PlanCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog served by `GET /plans`
    pub catalog: Arc<PlanCatalog>,
}

impl AppState {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
