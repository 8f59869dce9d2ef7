//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Page views recorded
//! - Heartbeats received, by outcome (known/unknown session)
//! - Offline signals received
//! - Sessions removed by the staleness sweep
//! - Currently online sessions

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Total page views recorded
pub static PAGE_VIEWS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("page_views_total", "Total number of page views recorded")
            .namespace("sitepulse"),
    )
    .expect("Failed to create PAGE_VIEWS_TOTAL metric")
});

/// Heartbeats received, labelled by whether the session was known
pub static HEARTBEATS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("heartbeats_total", "Total number of heartbeats received")
            .namespace("sitepulse"),
        &["outcome"], // "known", "unknown"
    )
    .expect("Failed to create HEARTBEATS_TOTAL metric")
});

/// Offline signals received
pub static OFFLINE_SIGNALS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("offline_signals_total", "Total number of offline signals received")
            .namespace("sitepulse"),
    )
    .expect("Failed to create OFFLINE_SIGNALS_TOTAL metric")
});

/// Sessions removed by the staleness sweep
pub static SESSIONS_SWEPT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("sessions_swept_total", "Total number of stale sessions removed")
            .namespace("sitepulse"),
    )
    .expect("Failed to create SESSIONS_SWEPT_TOTAL metric")
});

/// Currently online sessions
pub static ONLINE_SESSIONS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::with_opts(
        Opts::new("online_sessions", "Number of sessions currently tracked as online")
            .namespace("sitepulse"),
    )
    .expect("Failed to create ONLINE_SESSIONS metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(PAGE_VIEWS_TOTAL.clone()))
        .expect("Failed to register PAGE_VIEWS_TOTAL");
    registry
        .register(Box::new(HEARTBEATS_TOTAL.clone()))
        .expect("Failed to register HEARTBEATS_TOTAL");
    registry
        .register(Box::new(OFFLINE_SIGNALS_TOTAL.clone()))
        .expect("Failed to register OFFLINE_SIGNALS_TOTAL");
    registry
        .register(Box::new(SESSIONS_SWEPT_TOTAL.clone()))
        .expect("Failed to register SESSIONS_SWEPT_TOTAL");
    registry
        .register(Box::new(ONLINE_SESSIONS.clone()))
        .expect("Failed to register ONLINE_SESSIONS");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Metrics should be valid UTF-8")
}

/// Helper to record a page view
pub fn record_page_view() {
    PAGE_VIEWS_TOTAL.inc();
}

/// Helper to record a heartbeat by outcome
pub fn record_heartbeat(known: bool) {
    let outcome = if known { "known" } else { "unknown" };
    HEARTBEATS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Helper to record an offline signal
pub fn record_offline() {
    OFFLINE_SIGNALS_TOTAL.inc();
}

/// Helper to record the result of a sweep
pub fn record_sweep(removed: usize) {
    SESSIONS_SWEPT_TOTAL.inc_by(removed as u64);
}

/// Helper to update the online-sessions gauge
pub fn set_online_sessions(count: usize) {
    ONLINE_SESSIONS.set(count as i64);
}
