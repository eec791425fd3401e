//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use landing_core::plan::PlansResponse;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub plans: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        plans: state.catalog.plans().len(),
    })
}

/// Public plan listing, no authentication and no team scope
pub async fn list_plans(State(state): State<AppState>) -> Json<PlansResponse> {
    tracing::debug!(count = state.catalog.plans().len(), "Serving plans");

    Json(state.catalog.response().clone())
}
