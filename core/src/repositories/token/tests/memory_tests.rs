//! Unit tests for the in-memory token repository

use std::sync::Arc;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::account::Role;
use crate::domain::entities::token::{TokenKind, TokenRecord};
use crate::repositories::token::{InMemoryTokenRepository, TokenRepository};

fn record(value: &str, kind: TokenKind, ttl: Duration) -> TokenRecord {
    let now = Utc::now();
    TokenRecord::new(
        Uuid::new_v4(),
        Role::Employee,
        value.to_string(),
        None,
        kind,
        now + ttl,
        now,
    )
    .unwrap()
}

#[tokio::test]
async fn test_find_active_matches_value_and_kind() {
    let repo = InMemoryTokenRepository::new();
    let saved = repo
        .save(record("verify-me", TokenKind::Verification, Duration::minutes(15)))
        .await
        .unwrap();

    let found = repo
        .find_active("verify-me", TokenKind::Verification, Utc::now())
        .await
        .unwrap();
    assert_eq!(found.map(|r| r.id), Some(saved.id));

    // Same value, wrong kind
    assert!(repo
        .find_active("verify-me", TokenKind::Session, Utc::now())
        .await
        .unwrap()
        .is_none());

    // Unknown value
    assert!(repo
        .find_active("nope", TokenKind::Verification, Utc::now())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_find_active_is_case_sensitive() {
    let repo = InMemoryTokenRepository::new();
    repo.save(record("eyJhbGciOiJIUzI1NiJ9.AbC", TokenKind::Verification, Duration::minutes(15)))
        .await
        .unwrap();

    for altered in ["EYJHBGCIOIJIUZI1NIJ9.ABC", "eyjhbgcioijiuzi1nij9.abc"] {
        assert!(repo
            .find_active(altered, TokenKind::Verification, Utc::now())
            .await
            .unwrap()
            .is_none());
    }
}

#[tokio::test]
async fn test_expired_record_is_not_active() {
    let repo = InMemoryTokenRepository::new();
    let saved = repo
        .save(record("short", TokenKind::Verification, Duration::minutes(15)))
        .await
        .unwrap();

    let at_expiry = saved.expires_at;
    assert!(repo
        .find_active("short", TokenKind::Verification, at_expiry)
        .await
        .unwrap()
        .is_none());

    // Row still exists
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let repo = InMemoryTokenRepository::new();
    let saved = repo
        .save(record("once", TokenKind::Verification, Duration::minutes(15)))
        .await
        .unwrap();

    assert!(repo.consume(saved.id).await.unwrap());
    assert!(!repo.consume(saved.id).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_has_one_winner() {
    let repo = Arc::new(InMemoryTokenRepository::new());
    let saved = repo
        .save(record("race", TokenKind::Verification, Duration::minutes(15)))
        .await
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            let id = saved.id;
            tokio::spawn(async move { repo.consume(id).await })
        })
        .collect();

    let mut removed = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            removed += 1;
        }
    }
    assert_eq!(removed, 1);
}

#[tokio::test]
async fn test_find_by_account_and_count() {
    let repo = InMemoryTokenRepository::new();
    let mut session = record("access", TokenKind::Session, Duration::minutes(15));
    let account_id = session.account_id;
    session.refresh_token = Some("refresh".to_string());
    let mut verification = record("verify", TokenKind::Verification, Duration::minutes(15));
    verification.account_id = account_id;

    repo.save(session).await.unwrap();
    repo.save(verification).await.unwrap();
    repo.save(record("other", TokenKind::Session, Duration::minutes(15)))
        .await
        .unwrap();

    assert_eq!(repo.find_by_account(account_id).await.unwrap().len(), 2);
    assert_eq!(
        repo.count_by_account_and_kind(account_id, TokenKind::Session).await.unwrap(),
        1
    );
    assert_eq!(
        repo.count_by_account_and_kind(account_id, TokenKind::PasswordReset).await.unwrap(),
        0
    );
}
