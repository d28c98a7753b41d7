//! Token lifecycle: issue, persist, look up, consume

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{IssuedToken, SessionTokens, TokenKind, TokenRecord};
use crate::errors::DomainError;
use crate::repositories::TokenRepository;
use crate::services::clock::Clock;

use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;

/// Service for issuing tokens and tracking them in the token store
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    issuer: TokenIssuer,
    clock: Arc<dyn Clock>,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Token service configuration
    /// * `clock` - Time source for issuance and expiry checks
    pub fn new(
        repository: R,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let issuer = TokenIssuer::new(config, clock.clone())?;
        Ok(Self {
            repository,
            issuer,
            clock,
        })
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Issue an access/refresh pair and record it
    ///
    /// The record expires with the access token; the refresh token carries
    /// its own longer `exp`.
    pub async fn issue_session_tokens(&self, account: &Account) -> Result<SessionTokens, DomainError> {
        let tokens = self.issuer.issue_session(account.id, account.role)?;

        let record = TokenRecord::new(
            account.id,
            account.role,
            tokens.access.value.clone(),
            Some(tokens.refresh.value.clone()),
            TokenKind::Session,
            tokens.access.expires_at,
            self.clock.now(),
        )?;
        self.repository.save(record).await?;

        tracing::debug!(account_id = %account.id, "Session tokens issued");
        Ok(tokens)
    }

    /// Issue a single-use email verification token and record it
    pub async fn issue_verification_token(&self, account: &Account) -> Result<IssuedToken, DomainError> {
        let token = self.issuer.issue_verification(account.id, account.role)?;

        let record = TokenRecord::new(
            account.id,
            account.role,
            token.value.clone(),
            None,
            TokenKind::Verification,
            token.expires_at,
            self.clock.now(),
        )?;
        self.repository.save(record).await?;

        tracing::debug!(account_id = %account.id, expires_at = %token.expires_at, "Verification token issued");
        Ok(token)
    }

    /// Find a live record of `kind` for `value` as of now
    pub async fn find_active(
        &self,
        value: &str,
        kind: TokenKind,
    ) -> Result<Option<TokenRecord>, DomainError> {
        self.repository.find_active(value, kind, self.clock.now()).await
    }

    /// Remove a record. `Ok(false)` means another caller got there first.
    pub async fn consume(&self, record: &TokenRecord) -> Result<bool, DomainError> {
        self.repository.consume(record.id).await
    }
}
