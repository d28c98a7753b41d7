//! Unit tests for token entities

use uuid::Uuid;
use chrono::{Duration, Utc};
use crate::domain::entities::account::Role;
use crate::domain::entities::token::{
    Claims, TokenKind, TokenRecord, TokenUse, JWT_AUDIENCE, JWT_ISSUER,
};

#[test]
fn test_token_kind_codes_are_stable() {
    assert_eq!(TokenKind::Verification.code(), 1);
    assert_eq!(TokenKind::Session.code(), 2);
    assert_eq!(TokenKind::PasswordReset.code(), 3);
    assert_eq!(TokenKind::try_from(2u8), Ok(TokenKind::Session));
    assert!(TokenKind::try_from(9u8).is_err());
    assert_eq!(serde_json::to_string(&TokenKind::Verification).unwrap(), "1");
}

#[test]
fn test_claims_window() {
    let account_id = Uuid::new_v4();
    let now = Utc::now();
    let claims = Claims::new(
        account_id,
        Some(Role::GeneralHr),
        TokenUse::Access,
        JWT_ISSUER,
        JWT_AUDIENCE,
        now,
        Duration::minutes(15),
    );

    assert_eq!(claims.subject_id(), Some(account_id));
    assert_eq!(claims.exp - claims.iat, 15 * 60);
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
}

#[test]
fn test_claims_have_unique_ids() {
    let account_id = Uuid::new_v4();
    let now = Utc::now();
    let a = Claims::new(account_id, None, TokenUse::Refresh, JWT_ISSUER, JWT_AUDIENCE, now, Duration::days(7));
    let b = Claims::new(account_id, None, TokenUse::Refresh, JWT_ISSUER, JWT_AUDIENCE, now, Duration::days(7));
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_record_rejects_past_expiry() {
    let now = Utc::now();
    let result = TokenRecord::new(
        Uuid::new_v4(),
        Role::Employee,
        "value".to_string(),
        None,
        TokenKind::Verification,
        now,
        now,
    );
    assert!(result.is_err());
}

#[test]
fn test_record_activity_window() {
    let now = Utc::now();
    let record = TokenRecord::new(
        Uuid::new_v4(),
        Role::Employee,
        "value".to_string(),
        None,
        TokenKind::Verification,
        now + Duration::minutes(15),
        now,
    )
    .unwrap();

    assert!(record.is_active_at(now));
    assert!(record.is_active_at(now + Duration::minutes(14)));
    assert!(!record.is_active_at(now + Duration::minutes(15)));
    assert!(!record.is_active_at(now + Duration::hours(1)));
}
