//! # PlusHRM Core
//!
//! Core business logic and domain layer for the PlusHRM backend.
//! This crate contains the employee identity entities, the credential and
//! token lifecycle services, repository interfaces, and error types that
//! the infrastructure and API layers build on.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
