//! Unit tests for domain errors

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_codes_per_family() {
    let cases: Vec<(DomainError, &str)> = vec![
        (ValidationError::InvalidEmail.into(), "validation_error"),
        (AuthError::EmailAlreadyRegistered.into(), "email_already_registered"),
        (AuthError::AccountNotFound.into(), "account_not_found"),
        (
            AuthError::NotificationFailed { reason: "timeout".into() }.into(),
            "notification_failed",
        ),
        (TokenError::InvalidOrExpired.into(), "invalid_or_expired_token"),
        (TokenError::Expired.into(), "invalid_or_expired_token"),
        (
            TokenError::SigningFailed { reason: "bad key".into() }.into(),
            "token_signing_failed",
        ),
        (
            DomainError::StorageUnavailable { message: "down".into() },
            "storage_unavailable",
        ),
    ];

    for (error, code) in cases {
        assert_eq!(error.code(), code, "{:?}", error);
    }
}

#[test]
fn test_server_error_classification() {
    assert!(DomainError::StorageUnavailable { message: "x".into() }.is_server_error());
    assert!(DomainError::from(AuthError::NotificationFailed { reason: "x".into() }).is_server_error());
    assert!(!DomainError::from(AuthError::EmailAlreadyRegistered).is_server_error());
    assert!(!DomainError::from(TokenError::InvalidOrExpired).is_server_error());
}

#[test]
fn test_client_messages_hide_details() {
    let err = DomainError::from(AuthError::NotificationFailed {
        reason: "sendgrid returned 401".into(),
    });
    assert_eq!(err.to_string(), "Failed to send verification email");
    assert_eq!(
        ValidationError::RequiredField { field: "email".into() }.to_string(),
        "Missing required field: email"
    );
    assert_eq!(ValidationError::WeakPassword { reason: "must contain a digit".into() }.field(), "password");
}
