//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

/// Acknowledgement returned by the ingestion endpoints
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: &'static str,
}

impl AckResponse {
    pub fn page_view_recorded() -> Self {
        Self {
            success: true,
            message: "Page view recorded",
        }
    }

    pub fn heartbeat_received() -> Self {
        Self {
            success: true,
            message: "Heartbeat received",
        }
    }

    pub fn user_offline() -> Self {
        Self {
            success: true,
            message: "User offline",
        }
    }
}

/// Aggregate stats summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatsResponse {
    /// Sessions currently tracked as online
    pub online_users: usize,

    /// Page views recorded on the current calendar day (server-local time)
    pub today_views: usize,

    /// Buffered page views; capped by the store, so high-volume days
    /// report at most the buffer size
    pub total_views: usize,

    /// Today's most-viewed pages, count descending
    pub popular_pages: Vec<PopularPage>,

    /// When this summary was computed (ISO-8601)
    pub timestamp: String,
}

/// One entry in the popular-pages ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularPage {
    pub page: String,
    pub count: usize,
}
