//! Unit tests for the account write path

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::{NewAccount, Role};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{AccountRepository, InMemoryAccountRepository};
use crate::services::account::AccountService;
use crate::services::clock::SystemClock;
use crate::services::password::BcryptPasswordHasher;

fn service() -> (
    AccountService<InMemoryAccountRepository, BcryptPasswordHasher>,
    Arc<InMemoryAccountRepository>,
) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let service = AccountService::new(
        repo.clone(),
        Arc::new(BcryptPasswordHasher::new(BcryptPasswordHasher::MIN_COST)),
        Arc::new(SystemClock),
    );
    (service, repo)
}

fn new_account(email: &str, password: &str) -> NewAccount {
    NewAccount {
        first_name: " Jane ".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Role::Employee,
    }
}

#[tokio::test]
async fn test_create_hashes_and_normalizes() {
    let (service, repo) = service();

    let account = service
        .create(new_account(" Jane@Corp.COM ", "Abcdef1!"))
        .await
        .unwrap();

    assert_eq!(account.email, "jane@corp.com");
    assert_eq!(account.first_name, "Jane");
    assert_ne!(account.password_hash, "Abcdef1!");
    assert!(account.password_hash.starts_with("$2"));
    assert!(!account.verified && !account.enabled);
    assert!(service.check_password(&account, "Abcdef1!"));
    assert!(!service.check_password(&account, "Abcdef1?"));

    let stored = repo.find_by_email("jane@corp.com").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, account.password_hash);
    assert!(service.email_exists("JANE@corp.com").await.unwrap());
}

#[tokio::test]
async fn test_create_rejects_duplicates_case_insensitively() {
    let (service, _repo) = service();
    service.create(new_account("jane@corp.com", "Abcdef1!")).await.unwrap();

    let result = service.create(new_account("JANE@corp.com", "Abcdef1!")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_create_validates_input() {
    let (service, repo) = service();

    let bad_email = service.create(new_account("not-an-email", "Abcdef1!")).await;
    assert!(matches!(
        bad_email,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let weak = service.create(new_account("jane@corp.com", "password")).await;
    assert!(matches!(
        weak,
        Err(DomainError::ValidationErr(ValidationError::WeakPassword { .. }))
    ));

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let (service, _repo) = service();
    let account = service.create(new_account("jane@corp.com", "Abcdef1!")).await.unwrap();

    service.update_password(account.id, "Zyxwvu9#").await.unwrap();

    let stored = service.find_by_id(account.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, account.password_hash);
    assert!(service.check_password(&stored, "Zyxwvu9#"));
    assert!(!service.check_password(&stored, "Abcdef1!"));
}

#[tokio::test]
async fn test_update_password_unknown_account() {
    let (service, _repo) = service();
    let result = service.update_password(Uuid::new_v4(), "Zyxwvu9#").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::AccountNotFound))));
}

#[tokio::test]
async fn test_mark_verified_and_enabled() {
    let (service, _repo) = service();
    let account = service.create(new_account("jane@corp.com", "Abcdef1!")).await.unwrap();

    assert!(service.mark_verified_and_enabled(account.id).await.unwrap());
    let stored = service.find_by_email("jane@corp.com").await.unwrap().unwrap();
    assert!(stored.is_active());
}
