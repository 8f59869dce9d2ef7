//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod sweep;

pub use sweep::sweep_gate;
