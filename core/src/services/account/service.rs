//! Account service implementation

use std::sync::Arc;

use uuid::Uuid;

use hrm_shared::validation::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::account::{Account, NewAccount};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::clock::Clock;
use crate::services::password::{validate_password_policy, PasswordHasher};

/// Creates accounts and changes credentials, hashing on the way in
pub struct AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher + 'static,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<R, H> AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            hasher,
            clock,
        }
    }

    /// Create an unverified, disabled account
    ///
    /// The email is normalized and the password checked against the policy
    /// and hashed before the repository is called.
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account
    /// * `Err(AuthError::EmailAlreadyRegistered)` - Email taken, including
    ///   when a concurrent insert wins the race
    pub async fn create(&self, new_account: NewAccount) -> DomainResult<Account> {
        let email = normalize_email(&new_account.email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        validate_password_policy(&new_account.password)?;

        let password_hash = self.hash(new_account.password).await?;
        let account = Account::new(
            email,
            password_hash,
            new_account.first_name.trim().to_string(),
            new_account.last_name.trim().to_string(),
            new_account.role,
            self.clock.now(),
        );

        let account = self.repository.create(account).await?;
        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            role = %account.role,
            "Account created"
        );
        Ok(account)
    }

    /// Replace an account's password
    pub async fn update_password(&self, id: Uuid, new_password: &str) -> DomainResult<()> {
        validate_password_policy(new_password)?;
        let password_hash = self.hash(new_password.to_string()).await?;

        if !self
            .repository
            .update_password_hash(id, &password_hash, self.clock.now())
            .await?
        {
            return Err(AuthError::AccountNotFound.into());
        }

        tracing::info!(account_id = %id, "Password updated");
        Ok(())
    }

    /// Check a plaintext password against an account's stored hash
    pub fn check_password(&self, account: &Account, password: &str) -> bool {
        self.hasher.verify(password, &account.password_hash)
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.repository.find_by_email(&normalize_email(email)).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>> {
        self.repository.find_by_id(id).await
    }

    pub async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        self.repository.exists_by_email(&normalize_email(email)).await
    }

    /// Activate an account after its email was confirmed
    pub async fn mark_verified_and_enabled(&self, id: Uuid) -> DomainResult<bool> {
        self.repository
            .mark_verified_and_enabled(id, self.clock.now())
            .await
    }

    /// bcrypt is CPU bound; keep it off the async worker threads
    async fn hash(&self, password: String) -> DomainResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }
}
