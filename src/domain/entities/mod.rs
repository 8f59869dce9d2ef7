//! # Domain Entities
//!
//! Core entities representing the tracked analytics state.
//!
//! - **Session**: a client's tracked browsing presence, keyed by a
//!   client-supplied identifier and kept alive by heartbeats
//! - **PageView**: a single immutable page-view record with a
//!   server-assigned ingestion timestamp

mod page_view;
mod session;

pub use page_view::PageView;
pub use session::Session;
