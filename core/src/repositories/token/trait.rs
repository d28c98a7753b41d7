//! Token repository trait defining the interface for token record persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{TokenKind, TokenRecord};
use crate::errors::DomainError;

/// Repository trait for TokenRecord persistence operations
///
/// The store is the source of truth for whether a verification token may
/// still be used: a signed token with a valid signature is worthless once its
/// record has been consumed or has passed `expires_at`.
///
/// # Concurrency
/// [`consume`](TokenRepository::consume) must be a conditional delete. When
/// two callers race to consume the same record exactly one of them observes
/// `Ok(true)`.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new token record
    ///
    /// # Returns
    /// * `Ok(TokenRecord)` - The saved record
    /// * `Err(DomainError::StorageUnavailable)` - Save failed
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError>;

    /// Find a live record by its token value
    ///
    /// Matches on value AND kind AND `expires_at > now`. A record that
    /// exists but has expired is reported as `Ok(None)`, not as an error.
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Utc;
    /// # use hrm_core::repositories::TokenRepository;
    /// # use hrm_core::domain::entities::token::TokenKind;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_active("eyJhbGciOi...", TokenKind::Verification, Utc::now()).await? {
    ///     Some(record) => println!("token belongs to {}", record.account_id),
    ///     None => println!("invalid or expired"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_active(
        &self,
        value: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Option<TokenRecord>, DomainError>;

    /// Delete a record by ID
    ///
    /// # Returns
    /// * `Ok(true)` - This call removed the record
    /// * `Ok(false)` - The record was already gone
    async fn consume(&self, id: Uuid) -> Result<bool, DomainError>;

    /// All records issued to an account, regardless of expiry
    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<TokenRecord>, DomainError>;

    /// Count records of one kind issued to an account
    async fn count_by_account_and_kind(
        &self,
        account_id: Uuid,
        kind: TokenKind,
    ) -> Result<usize, DomainError> {
        let records = self.find_by_account(account_id).await?;
        Ok(records.iter().filter(|r| r.kind == kind).count())
    }
}
