//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use hrm_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Stable, machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::StorageUnavailable { .. } => error_codes::STORAGE_UNAVAILABLE,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(err) => err.code(),
            DomainError::Token(err) => err.code(),
        }
    }

    /// Whether the failure is on the server side rather than the caller's input
    pub fn is_server_error(&self) -> bool {
        match self {
            DomainError::StorageUnavailable { .. } | DomainError::Internal { .. } => true,
            DomainError::Auth(AuthError::NotificationFailed { .. }) => true,
            DomainError::Token(TokenError::SigningFailed { .. }) => true,
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
