//! Landing page HTTP server
//!
//! Axum-based server providing the public plans API and hosting the
//! WASM frontend.

mod catalog;
mod config;
mod handlers;
mod state;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::PlanCatalog;
use crate::config::ServerConfig;
use crate::handlers::{health_check, list_plans};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = PlanCatalog::load(config.plans_file.as_deref())?;
    match &config.plans_file {
        Some(path) => tracing::info!(path = %path.display(), plans = catalog.plans().len(), "Loaded plan catalog"),
        None => tracing::info!(plans = catalog.plans().len(), "Using built-in plan catalog"),
    }

    let app = router(AppState::new(catalog), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Landing server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /plans  - Public plan catalog");
    tracing::info!("  GET  /*      - Frontend from {}", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState, static_dir: &Path) -> Router {
    // The frontend may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/plans", get(list_plans))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
