//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the PlusHRM backend,
//! following Clean Architecture principles. It provides concrete
//! implementations of the repository and collaborator traits declared in
//! `hrm_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repositories using SQLx, plus pool management
//! - **Email**: verification email delivery (SendGrid, mock)
//! - **Geo**: client IP geolocation (ipinfo.io, static)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use hrm_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery module - verification notices
pub mod email;

/// IP geolocation module
pub mod geo;

/// Configuration types consumed by infrastructure services
pub mod config {
    pub use hrm_shared::config::{
        DatabaseConfig, EmailConfig, EmailProvider, GeoConfig, GeoProvider,
    };
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),

    /// Geolocation service error
    #[error("Geolocation error: {0}")]
    Geo(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
