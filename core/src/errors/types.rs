//! Error families for onboarding, token handling and input validation
//!
//! Messages here are safe to show to API clients. Server-side details are
//! carried in fields and logged, not rendered.

use hrm_shared::error_codes;
use thiserror::Error;

/// Account lifecycle errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Employee already exists with this email.")]
    EmailAlreadyRegistered,

    #[error("Employee not found")]
    AccountNotFound,

    #[error("Failed to send verification email")]
    NotificationFailed { reason: String },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmailAlreadyRegistered => error_codes::EMAIL_ALREADY_REGISTERED,
            AuthError::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
            AuthError::NotificationFailed { .. } => error_codes::NOTIFICATION_FAILED,
        }
    }
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// No live record matches the presented value
    #[error("Invalid or expired token")]
    InvalidOrExpired,

    #[error("Token expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid token")]
    Malformed,

    #[error("Token generation failed")]
    SigningFailed { reason: String },
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::SigningFailed { .. } => error_codes::TOKEN_SIGNING_FAILED,
            _ => error_codes::INVALID_OR_EXPIRED_TOKEN,
        }
    }
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password {reason}")]
    WeakPassword { reason: String },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field } | ValidationError::InvalidFormat { field } => {
                field
            }
            ValidationError::InvalidEmail => "email",
            ValidationError::WeakPassword { .. } => "password",
        }
    }
}
