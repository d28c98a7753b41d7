//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and password hashing
//! - `database` - Storage backend and connection pool
//! - `email` - Outbound email provider
//! - `environment` - Environment detection and logging configuration
//! - `geo` - IP geolocation provider
//! - `server` - HTTP server and public URL
//!
//! Configuration is read once at startup and passed down by value; nothing
//! reads the process environment after [`AppConfig::from_env`] returns.

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod geo;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use geo::{GeoConfig, GeoProvider};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Email configuration
    pub email: EmailConfig,

    /// Geolocation configuration
    pub geo: GeoConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            email: EmailConfig::default(),
            geo: GeoConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
            geo: GeoConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Problems that should block startup in production
    pub fn production_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.environment.is_production() {
            return issues;
        }
        if self.auth.jwt.is_using_default_secret() {
            issues.push("JWT_SECRET must be set in production".to_string());
        }
        if self.database.backend == StorageBackend::Memory {
            issues.push("in-memory storage is not durable".to_string());
        }
        if self.email.provider == EmailProvider::Mock {
            issues.push("mock email provider does not deliver mail".to_string());
        }
        issues
    }
}
