//! Error mapping shared by all handlers

pub mod error;

pub use error::{json_error_handler, status_for, ApiError};
