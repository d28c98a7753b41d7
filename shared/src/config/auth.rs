//! Authentication configuration: token signing and credential hashing

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET` is not set. Only suitable for development.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Email verification token expiry time in seconds
    pub verification_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: 900,        // 15 minutes
            refresh_token_expiry: 604800,    // 7 days
            verification_token_expiry: 900,  // 15 minutes
            issuer: String::from("plushrm"),
            audience: String::from("plushrm-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Set verification token expiry in minutes
    pub fn with_verification_expiry_minutes(mut self, minutes: i64) -> Self {
        self.verification_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry);
        let verification_token_expiry = std::env::var("JWT_VERIFICATION_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.verification_token_expiry);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer);
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience);

        Self {
            secret,
            access_token_expiry,
            refresh_token_expiry,
            verification_token_expiry,
            issuer,
            audience,
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor (4..=31)
    pub hash_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { hash_cost: 12 }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let hash_cost = std::env::var("HASH_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .map(|cost| cost.clamp(4, 31))
            .unwrap_or(Self::default().hash_cost);

        Self { hash_cost }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            password: PasswordConfig::from_env(),
        }
    }
}
