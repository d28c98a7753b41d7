//! Type definitions shared by the API surface
//!
//! - `response` - Health check payloads

pub mod response;

pub use response::{HealthResponse, HealthStatus};
