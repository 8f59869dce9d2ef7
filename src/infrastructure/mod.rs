//! Infrastructure Layer
//!
//! Contains implementations for process-local state and observability:
//! - In-memory stats store (session table + bounded view buffer)
//! - Prometheus metrics

pub mod metrics;
pub mod store;
