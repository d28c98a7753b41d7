//! Request and response bodies

pub mod auth;
pub mod error;

pub use auth::{SignupRequest, SignupResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
