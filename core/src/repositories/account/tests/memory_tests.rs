//! Unit tests for the in-memory account repository

use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};
use crate::errors::{AuthError, DomainError};
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn account(email: &str) -> Account {
    Account::new(
        email.to_string(),
        "$2b$04$hash".to_string(),
        "Jane".to_string(),
        "Doe".to_string(),
        Role::Employee,
        Utc::now(),
    )
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("jane@corp.com")).await.unwrap();

    let by_email = repo.find_by_email("jane@corp.com").await.unwrap().unwrap();
    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(by_email.id, created.id);
    assert_eq!(by_id.email, "jane@corp.com");
    assert!(repo.exists_by_email("jane@corp.com").await.unwrap());
    assert!(!repo.exists_by_email("john@corp.com").await.unwrap());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("jane@corp.com")).await.unwrap();

    let result = repo.create(account("jane@corp.com")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_have_one_winner() {
    let repo = Arc::new(InMemoryAccountRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(account("race@corp.com")).await })
        })
        .collect();

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
async fn test_mark_verified_and_enabled() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("jane@corp.com")).await.unwrap();

    assert!(repo.mark_verified_and_enabled(created.id, Utc::now()).await.unwrap());
    assert!(repo.mark_verified_and_enabled(created.id, Utc::now()).await.unwrap());
    assert!(!repo.mark_verified_and_enabled(Uuid::new_v4(), Utc::now()).await.unwrap());

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(stored.verified && stored.enabled);
}

#[tokio::test]
async fn test_update_password_hash() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("jane@corp.com")).await.unwrap();

    assert!(repo.update_password_hash(created.id, "$2b$04$new", Utc::now()).await.unwrap());
    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "$2b$04$new");

    assert!(!repo.update_password_hash(Uuid::new_v4(), "x", Utc::now()).await.unwrap());
}
