//! Unit tests for the token service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::account::{Account, Role};
use crate::domain::entities::token::TokenKind;
use crate::repositories::{InMemoryTokenRepository, TokenRepository};
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::{TokenService, TokenServiceConfig};

fn account() -> Account {
    Account::new(
        "jane@corp.com".to_string(),
        "$2b$04$hash".to_string(),
        "Jane".to_string(),
        "Doe".to_string(),
        Role::Employee,
        Utc::now(),
    )
}

fn service(clock: ManualClock) -> (TokenService<InMemoryTokenRepository>, InMemoryTokenRepository) {
    let repo = InMemoryTokenRepository::new();
    let service =
        TokenService::new(repo.clone(), TokenServiceConfig::default(), Arc::new(clock)).unwrap();
    (service, repo)
}

#[tokio::test]
async fn test_session_tokens_are_recorded() {
    let clock = ManualClock::default();
    let (service, repo) = service(clock.clone());
    let account = account();

    let tokens = service.issue_session_tokens(&account).await.unwrap();

    let records = repo.find_by_account(account.id).await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.kind, TokenKind::Session);
    assert_eq!(record.access_token, tokens.access.value);
    assert_eq!(record.refresh_token.as_deref(), Some(tokens.refresh.value.as_str()));
    assert_eq!(record.expires_at, clock.now() + Duration::minutes(15));
}

#[tokio::test]
async fn test_verification_token_lifecycle() {
    let clock = ManualClock::default();
    let (service, _repo) = service(clock.clone());
    let account = account();

    let token = service.issue_verification_token(&account).await.unwrap();

    let record = service
        .find_active(&token.value, TokenKind::Verification)
        .await
        .unwrap()
        .expect("record should be live");
    assert_eq!(record.account_id, account.id);
    assert!(record.refresh_token.is_none());

    // Not a session token
    assert!(service
        .find_active(&token.value, TokenKind::Session)
        .await
        .unwrap()
        .is_none());

    assert!(service.consume(&record).await.unwrap());
    assert!(!service.consume(&record).await.unwrap());
    assert!(service
        .find_active(&token.value, TokenKind::Verification)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_verification_token_expires_with_the_clock() {
    let clock = ManualClock::default();
    let (service, repo) = service(clock.clone());
    let account = account();

    let token = service.issue_verification_token(&account).await.unwrap();

    clock.advance(Duration::minutes(14));
    assert!(service
        .find_active(&token.value, TokenKind::Verification)
        .await
        .unwrap()
        .is_some());

    clock.advance(Duration::minutes(1));
    assert!(service
        .find_active(&token.value, TokenKind::Verification)
        .await
        .unwrap()
        .is_none());
    assert_eq!(repo.len().await, 1);
}
