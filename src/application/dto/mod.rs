//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{PageViewRequest, SessionSignalRequest};
pub use response::{AckResponse, CurrentStatsResponse, PopularPage};
