//! End-to-end checks of `HttpPlanSource` against a local plans server.

#![cfg(feature = "http")]

use axum::{http::StatusCode, routing::get, Router};
use landing_runtime::{HttpPlanSource, LandingError, PlanFetcher, PlanSource, PricingState};
use tokio::net::TcpListener;

const CATALOG: &str = r#"{
    "plans": [
        {"code": "basic", "display_name": "Basic", "prices": [{"amount_cents": 900, "currency": "usd"}]},
        {"code": "premium", "display_name": "Premium", "max_projects": -1, "prices": [
            {"nickname": "monthly", "amount_cents": 1999, "currency": "usd", "interval": "month",
             "stripe_price_id": "price_premium_monthly", "eligible_trial_days": 0}
        ]},
        {"code": "enterprise", "prices": []}
    ]
}"#;

/// Serve `app` on an ephemeral port and return its base URL
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn json_route(body: &'static str) -> Router {
    Router::new().route(
        "/plans",
        get(move || async move { ([("content-type", "application/json")], body) }),
    )
}

#[tokio::test]
async fn test_fetches_and_selects_premium() {
    let base = serve(json_route(CATALOG)).await;
    let fetcher = PlanFetcher::new(HttpPlanSource::new(base));

    let plans = fetcher.source().fetch_plans().await.unwrap();
    assert_eq!(plans.len(), 3);

    match fetcher.load().await {
        PricingState::PlanReady { plan, summary } => {
            assert_eq!(plan.code, "premium");
            assert!(plan.has_unlimited_projects());
            assert_eq!(summary.price_label, "USD 19.99");
            assert_eq!(summary.price_id, "price_premium_monthly");
            assert!(summary.trial.is_none());
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_catalog_renders_nothing() {
    let base = serve(json_route(r#"{"plans": []}"#)).await;
    let state = PlanFetcher::new(HttpPlanSource::new(base)).load().await;

    assert_eq!(state, PricingState::NoPlanAvailable);
}

#[tokio::test]
async fn test_server_error_is_swallowed() {
    let app = Router::new().route("/plans", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = serve(app).await;
    let fetcher = PlanFetcher::new(HttpPlanSource::new(base));

    assert!(matches!(
        fetcher.fetch().await,
        Err(LandingError::Status { code: 500 })
    ));
    assert_eq!(fetcher.load().await, PricingState::NoPlanAvailable);
}

#[tokio::test]
async fn test_malformed_body_is_swallowed() {
    let base = serve(json_route(r#"{"plans": "soon"}"#)).await;
    let fetcher = PlanFetcher::new(HttpPlanSource::new(base));

    assert!(matches!(fetcher.fetch().await, Err(LandingError::Decode(_))));
    assert_eq!(fetcher.load().await, PricingState::NoPlanAvailable);
}

#[tokio::test]
async fn test_unreachable_backend_is_swallowed() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = PlanFetcher::new(HttpPlanSource::new(format!("http://{addr}")));

    assert!(matches!(fetcher.fetch().await, Err(LandingError::Network(_))));
    assert_eq!(fetcher.load().await, PricingState::NoPlanAvailable);
}
