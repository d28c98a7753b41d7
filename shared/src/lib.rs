//! Shared utilities and common types for the PlusHRM server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and error codes
//! - Utility functions (email validation, masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment, GeoConfig,
    GeoProvider, JwtConfig, LoggingConfig, PasswordConfig, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus};
pub use utils::validation;
