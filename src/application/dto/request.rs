//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Ingestion is deliberately permissive: `sessionId` and `page` default to
//! empty strings when omitted, so a degenerate request still records (the
//! empty string then acts as the session key). Unknown fields on a page
//! view are captured verbatim rather than rejected.

use serde::Deserialize;

/// Page view submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewRequest {
    /// Client session identifier
    #[serde(default)]
    pub session_id: String,

    /// Page that was viewed
    #[serde(default)]
    pub page: String,

    /// Any additional fields, passed through and stored verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Heartbeat / offline signal carrying only a session identifier
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSignalRequest {
    /// Client session identifier
    #[serde(default)]
    pub session_id: String,
}
