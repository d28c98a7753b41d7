//! Configuration for the token service

use chrono::Duration;
use hrm_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
    VERIFICATION_TOKEN_EXPIRY_MINUTES,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// `iss` claim
    pub issuer: String,
    /// `aud` claim
    pub audience: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
    /// Email verification token lifetime
    pub verification_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            access_token_ttl: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_token_ttl: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
            verification_token_ttl: Duration::minutes(VERIFICATION_TOKEN_EXPIRY_MINUTES),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
            access_token_ttl: Duration::seconds(jwt.access_token_expiry),
            refresh_token_ttl: Duration::seconds(jwt.refresh_token_expiry),
            verification_token_ttl: Duration::seconds(jwt.verification_token_expiry),
        }
    }
}
