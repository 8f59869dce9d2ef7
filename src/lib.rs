//! # Sitepulse
//!
//! A lightweight web-analytics ingestion server:
//! - Records page views into a bounded in-memory buffer
//! - Tracks "online" sessions via client heartbeats
//! - Serves an aggregate summary (online users, today's views, top pages)
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities (sessions, page views)
//! - **Application Layer**: Stats service and wire DTOs
//! - **Infrastructure Layer**: In-memory stats store and metrics
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! sitepulse/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities
//! +-- application/    Stats service and DTOs
//! +-- infrastructure/ In-memory store and metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core entities
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - State container and metrics
pub mod infrastructure;

// Presentation layer - HTTP routes and handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
