//! Stale-Session Sweep Middleware
//!
//! The sweep is lazy and request-gated rather than scheduled: before a
//! stats request is handled, stale sessions are evicted if the gate
//! interval has elapsed since the previous sweep. If no requests arrive,
//! stale sessions linger until the next one does.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::Session;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Run the stale-session sweep if due, then pass the request on.
pub async fn sweep_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(removed) = state.store.sweep_if_due(Session::now_ms()) {
        if removed > 0 {
            tracing::debug!(removed, "Swept stale sessions");
        }
        metrics::record_sweep(removed);
        metrics::set_online_sessions(state.store.session_count());
    }

    next.run(request).await
}
