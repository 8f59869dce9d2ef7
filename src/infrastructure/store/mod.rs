//! In-Memory Stats Store
//!
//! Process-wide state container for tracked sessions and page views.

mod stats_store;

pub use stats_store::{StatsSnapshot, StatsStore};
