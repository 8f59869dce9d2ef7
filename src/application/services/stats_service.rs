//! Stats Service
//!
//! Business operations over the in-memory stats store: ingesting page
//! views, refreshing and removing sessions, and computing the aggregate
//! summary served by `GET /current`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::application::dto::request::PageViewRequest;
use crate::application::dto::response::{CurrentStatsResponse, PopularPage};
use crate::domain::PageView;
use crate::infrastructure::metrics;
use crate::infrastructure::store::StatsStore;

/// Service coordinating stats operations against the store.
pub struct StatsService {
    store: Arc<StatsStore>,
    popular_pages_limit: usize,
}

impl StatsService {
    pub fn new(store: Arc<StatsStore>, popular_pages_limit: usize) -> Self {
        Self {
            store,
            popular_pages_limit,
        }
    }

    /// Record a page view and upsert its session.
    pub fn record_page_view(&self, request: PageViewRequest) {
        let view = PageView::new(request.session_id, request.page, request.extra);
        self.store.record_view(view);
        metrics::record_page_view();
        metrics::set_online_sessions(self.store.session_count());
    }

    /// Refresh a session's heartbeat. Unknown sessions are a silent no-op.
    pub fn heartbeat(&self, session_id: &str) {
        let known = self.store.heartbeat(session_id);
        if !known {
            tracing::debug!(session_id, "Heartbeat for unknown session ignored");
        }
        metrics::record_heartbeat(known);
    }

    /// Remove a session in response to an explicit offline signal.
    pub fn go_offline(&self, session_id: &str) {
        self.store.remove_session(session_id);
        metrics::record_offline();
        metrics::set_online_sessions(self.store.session_count());
    }

    /// Compute the aggregate summary from current in-memory state.
    pub fn current(&self) -> CurrentStatsResponse {
        let snapshot = self.store.snapshot();
        let now = Local::now();
        let today = now.date_naive();

        let today_views = snapshot.views.iter().filter(|v| v.is_on(today)).count();
        let popular_pages =
            rank_popular_pages(&snapshot.views, today, self.popular_pages_limit);

        CurrentStatsResponse {
            online_users: snapshot.online_sessions,
            today_views,
            total_views: snapshot.views.len(),
            popular_pages,
            timestamp: now.to_rfc3339(),
        }
    }
}

/// Rank today's page views by page, count descending.
///
/// Ties are broken by the first occurrence's position in the buffer, so the
/// ordering is stable across repeated summaries over the same state.
fn rank_popular_pages(views: &[PageView], today: NaiveDate, limit: usize) -> Vec<PopularPage> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, view) in views.iter().enumerate() {
        if !view.is_on(today) {
            continue;
        }
        let entry = counts.entry(view.page.as_str()).or_insert((position, 0));
        entry.1 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (pos_a, count_a)), (_, (pos_b, count_b))| {
        count_b.cmp(count_a).then(pos_a.cmp(pos_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(page, (_, count))| PopularPage {
            page: page.to_string(),
            count,
        })
        .collect()
}
