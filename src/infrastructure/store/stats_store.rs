//! In-memory state container for sessions and page views.
//!
//! All analytics state lives here: a session table keyed by the
//! client-supplied identifier and a bounded, insertion-ordered page-view
//! buffer. The store is owned by the application state and injected into
//! handlers; it is reset to empty on process restart and never shared
//! across instances.
//!
//! A single lock covers both structures so a summary read always sees the
//! session table and the view buffer at the same point in time.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;

use crate::config::AnalyticsSettings;
use crate::domain::{PageView, Session};

/// Consistent point-in-time copy of the store, used for summary computation.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    /// Number of sessions currently tracked as online
    pub online_sessions: usize,

    /// All buffered page views in arrival order
    pub views: Vec<PageView>,
}

struct StoreInner {
    sessions: HashMap<String, Session>,
    views: VecDeque<PageView>,
    last_sweep_ms: i64,
}

/// Process-wide analytics state container.
pub struct StatsStore {
    session_ttl_ms: i64,
    sweep_interval_ms: i64,
    max_stored_views: usize,
    inner: RwLock<StoreInner>,
}

impl StatsStore {
    /// Create an empty store configured from analytics settings.
    ///
    /// The sweep gate starts at construction time, so the first sweep can
    /// run at the earliest one full interval after startup.
    pub fn new(settings: &AnalyticsSettings) -> Self {
        Self {
            session_ttl_ms: settings.session_ttl_ms(),
            sweep_interval_ms: settings.sweep_interval_ms(),
            max_stored_views: settings.max_stored_views,
            inner: RwLock::new(StoreInner {
                sessions: HashMap::new(),
                views: VecDeque::new(),
                last_sweep_ms: Session::now_ms(),
            }),
        }
    }

    /// Append a page view and upsert its session.
    ///
    /// The session keeps its original `first_seen` if it already existed;
    /// `last_heartbeat` and `current_page` are always refreshed. The view
    /// buffer is truncated from the front so only the most recent
    /// `max_stored_views` entries survive.
    pub fn record_view(&self, view: PageView) {
        let now_ms = Session::now_ms();
        let mut inner = self.inner.write();

        match inner.sessions.entry(view.session_id.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().record_view(view.page.clone(), now_ms),
            Entry::Vacant(entry) => {
                entry.insert(Session::new(view.session_id.clone(), view.page.clone(), now_ms));
            }
        }

        inner.views.push_back(view);
        while inner.views.len() > self.max_stored_views {
            inner.views.pop_front();
        }
    }

    /// Refresh a session's heartbeat. Unknown sessions are left alone;
    /// a heartbeat never creates one. Returns whether the session existed.
    pub fn heartbeat(&self, session_id: &str) -> bool {
        let mut inner = self.inner.write();
        match inner.sessions.get_mut(session_id) {
            Some(session) => {
                session.touch(Session::now_ms());
                true
            }
            None => false,
        }
    }

    /// Remove a session. Returns whether it was present.
    pub fn remove_session(&self, session_id: &str) -> bool {
        self.inner.write().sessions.remove(session_id).is_some()
    }

    /// Run the stale-session sweep if the gate interval has elapsed.
    ///
    /// Returns `Some(removed)` when the sweep ran (even if nothing was
    /// stale), `None` when it was skipped because the previous sweep is
    /// still within the gate window.
    pub fn sweep_if_due(&self, now_ms: i64) -> Option<usize> {
        let mut inner = self.inner.write();
        if now_ms - inner.last_sweep_ms <= self.sweep_interval_ms {
            return None;
        }
        inner.last_sweep_ms = now_ms;

        let before = inner.sessions.len();
        let ttl_ms = self.session_ttl_ms;
        inner.sessions.retain(|_, session| !session.is_stale(now_ms, ttl_ms));
        Some(before - inner.sessions.len())
    }

    /// Number of sessions currently tracked as online.
    pub fn session_count(&self) -> usize {
        self.inner.read().sessions.len()
    }

    /// Number of buffered page views.
    pub fn view_count(&self) -> usize {
        self.inner.read().views.len()
    }

    /// Take a consistent snapshot for summary computation.
    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.inner.read();
        StatsSnapshot {
            online_sessions: inner.sessions.len(),
            views: inner.views.iter().cloned().collect(),
        }
    }
}
