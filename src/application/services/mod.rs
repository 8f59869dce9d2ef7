//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **StatsService**: Page-view ingestion, session presence, and summary
//!   computation

pub mod stats_service;

pub use stats_service::StatsService;
