//! Application Error Types
//!
//! Centralized error handling with Axum integration.
//!
//! The error surface is intentionally small: unmatched routes map to a 404
//! with `{"error":"Not found"}`, and every handling failure (malformed JSON
//! body included) maps to a 500 with `{"error":"Internal server error"}`.
//! The original error is logged server-side for diagnostics; callers never
//! see the distinction.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
