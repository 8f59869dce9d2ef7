//! # Domain Layer
//!
//! The domain layer contains the core tracking model of the analytics
//! server. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Session, PageView)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Entities encapsulate domain behavior (staleness, day bucketing)

pub mod entities;

// Re-export commonly used types
pub use entities::*;
