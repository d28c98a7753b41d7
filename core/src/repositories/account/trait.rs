//! Account repository trait defining the interface for employee account persistence.
//!
//! The repository stores already-hashed credentials. Turning a plaintext
//! password into a hash is the job of
//! [`AccountService`](crate::services::account::AccountService), which is the
//! only caller that should create accounts or change credentials.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// # Uniqueness
/// Email addresses are unique across all accounts. Implementations must
/// enforce this atomically (a unique index, or check-and-insert under one
/// lock) so that of two concurrent `create` calls for the same email exactly
/// one succeeds and the other fails with
/// [`AuthError::EmailAlreadyRegistered`](crate::errors::AuthError::EmailAlreadyRegistered).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account uses this email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - Email taken
    /// * `Err(DomainError::StorageUnavailable)` - Storage error occurred
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Set `verified` and `enabled` together
    ///
    /// Idempotent: re-applying to an already active account succeeds.
    ///
    /// # Returns
    /// * `Ok(true)` - An account with this ID exists and is now active
    /// * `Ok(false)` - No account with this ID
    async fn mark_verified_and_enabled(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Replace the stored password hash
    ///
    /// # Returns
    /// * `Ok(true)` - Hash updated
    /// * `Ok(false)` - No account with this ID
    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Check whether an email address is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
