//! Page view entity.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single recorded page view.
///
/// Immutable once appended. Besides the expected `session_id` and `page`
/// fields, any extra fields the client submitted are stored verbatim in
/// `extra`. The timestamp is assigned server-side at ingestion; calendar-day
/// bucketing uses the server's local time zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Session the view belongs to (empty if the client omitted it)
    pub session_id: String,

    /// Page that was viewed
    pub page: String,

    /// Server-assigned ingestion timestamp
    pub timestamp: DateTime<Local>,

    /// Any additional client-supplied fields, stored verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PageView {
    /// Create a page view stamped with the current local time.
    pub fn new(
        session_id: impl Into<String>,
        page: impl Into<String>,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            page: page.into(),
            timestamp: Local::now(),
            extra,
        }
    }

    /// Check whether the view was recorded on the given calendar date.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.timestamp.date_naive() == date
    }
}
