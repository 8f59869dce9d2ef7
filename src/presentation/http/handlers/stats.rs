//! Stats Handlers
//!
//! Ingestion and summary endpoints. Malformed request bodies are not
//! distinguished from other failures: anything that goes wrong while
//! handling maps to a 500 with the details kept server-side.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::application::dto::{
    AckResponse, CurrentStatsResponse, PageViewRequest, SessionSignalRequest,
};
use crate::application::services::StatsService;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn stats_service(state: &AppState) -> StatsService {
    StatsService::new(
        state.store.clone(),
        state.settings.analytics.popular_pages_limit,
    )
}

/// Record a page view
pub async fn record_pageview(
    State(state): State<AppState>,
    payload: Result<Json<PageViewRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::Internal(format!("Malformed page view payload: {}", e)))?;

    stats_service(&state).record_page_view(request);
    Ok(Json(AckResponse::page_view_recorded()))
}

/// Refresh a session's heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    payload: Result<Json<SessionSignalRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::Internal(format!("Malformed heartbeat payload: {}", e)))?;

    stats_service(&state).heartbeat(&request.session_id);
    Ok(Json(AckResponse::heartbeat_received()))
}

/// Remove a session on an explicit offline signal
pub async fn go_offline(
    State(state): State<AppState>,
    payload: Result<Json<SessionSignalRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::Internal(format!("Malformed offline payload: {}", e)))?;

    stats_service(&state).go_offline(&request.session_id);
    Ok(Json(AckResponse::user_offline()))
}

/// Compute and return the aggregate summary
pub async fn current_stats(
    State(state): State<AppState>,
) -> Result<Json<CurrentStatsResponse>, AppError> {
    Ok(Json(stats_service(&state).current()))
}
