//! Tracked browsing session entity.
//!
//! A session is created on the first page view carrying its identifier,
//! refreshed by heartbeats and further page views, and removed either by an
//! explicit offline signal or by the staleness sweep.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Represents a client's tracked browsing presence.
///
/// Timestamps are milliseconds since the Unix epoch, matching the wire
/// format clients send heartbeats against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Client-supplied session identifier (the table key)
    pub session_id: String,

    /// When the session was first observed; set once, never updated
    pub first_seen: i64,

    /// When the session last reported activity (page view or heartbeat)
    pub last_heartbeat: i64,

    /// Page the session most recently viewed
    pub current_page: String,
}

impl Session {
    /// Create a new session first observed at `now_ms` on `page`.
    pub fn new(session_id: impl Into<String>, page: impl Into<String>, now_ms: i64) -> Self {
        Self {
            session_id: session_id.into(),
            first_seen: now_ms,
            last_heartbeat: now_ms,
            current_page: page.into(),
        }
    }

    /// Refresh activity: update `last_heartbeat` and the current page.
    /// `first_seen` is deliberately left untouched.
    pub fn record_view(&mut self, page: impl Into<String>, now_ms: i64) {
        self.last_heartbeat = now_ms;
        self.current_page = page.into();
    }

    /// Refresh activity from a heartbeat without changing the current page.
    pub fn touch(&mut self, now_ms: i64) {
        self.last_heartbeat = now_ms;
    }

    /// Check whether the session is stale at `now_ms` given a TTL.
    pub fn is_stale(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms - self.last_heartbeat > ttl_ms
    }

    /// Current time in epoch milliseconds.
    pub fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }
}
