//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::sweep_gate;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/stats", stats_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Anything unrouted is a plain 404; a known path hit with the
        // wrong method falls through to the same 404 rather than a 405
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}

/// Stats ingestion and summary routes
fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/pageview", post(handlers::stats::record_pageview))
        .route("/heartbeat", post(handlers::stats::heartbeat))
        .route("/offline", post(handlers::stats::go_offline))
        .route("/current", get(handlers::stats::current_stats))
        .method_not_allowed_fallback(not_found)
        // Evict stale sessions before any stats request is handled
        .route_layer(middleware::from_fn_with_state(state, sweep_gate))
}

/// Fallback for unmatched paths and methods
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}
