//! Main verification service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenKind;
use crate::domain::value_objects::VerificationOutcome;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{AccountRepository, TokenRepository};
use crate::services::account::AccountService;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Verification service for signup email confirmation
pub struct SignupVerificationService<A, H, T>
where
    A: AccountRepository,
    H: PasswordHasher + 'static,
    T: TokenRepository,
{
    account_service: Arc<AccountService<A, H>>,
    token_service: Arc<TokenService<T>>,
}

impl<A, H, T> SignupVerificationService<A, H, T>
where
    A: AccountRepository,
    H: PasswordHasher + 'static,
    T: TokenRepository,
{
    pub fn new(
        account_service: Arc<AccountService<A, H>>,
        token_service: Arc<TokenService<T>>,
    ) -> Self {
        Self {
            account_service,
            token_service,
        }
    }

    /// Confirm an email address with a verification token
    ///
    /// This method:
    /// 1. Looks up a live verification record for the token value
    /// 2. Resolves the account the record was issued for
    /// 3. Marks the account verified and enabled
    /// 4. Consumes the record
    ///
    /// If two requests race with the same token both may reach step 3
    /// (which is idempotent), but only the one whose delete removes the
    /// record succeeds; the other gets `InvalidOrExpired`.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationOutcome)` - Account is now verified and enabled
    /// * `Err(TokenError::InvalidOrExpired)` - Unknown, expired or already used token
    /// * `Err(AuthError::AccountNotFound)` - Token references a missing account
    pub async fn verify_signup(&self, token: &str) -> DomainResult<VerificationOutcome> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::InvalidOrExpired.into());
        }

        // Step 1: Find a live verification record
        let record = self
            .token_service
            .find_active(token, TokenKind::Verification)
            .await?
            .ok_or_else(|| {
                tracing::info!("Verification rejected: invalid or expired token");
                TokenError::InvalidOrExpired
            })?;

        // Step 2: Resolve the account
        let account = self
            .account_service
            .find_by_id(record.account_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    account_id = %record.account_id,
                    token_id = %record.id,
                    "Verification token references a missing account"
                );
                AuthError::AccountNotFound
            })?;

        // Step 3: Activate
        if !self.account_service.mark_verified_and_enabled(account.id).await? {
            return Err(AuthError::AccountNotFound.into());
        }

        // Step 4: Consume; losing the race means someone else used it
        if !self.token_service.consume(&record).await? {
            tracing::info!(token_id = %record.id, "Verification token already consumed");
            return Err(TokenError::InvalidOrExpired.into());
        }

        tracing::info!(account_id = %account.id, "Account verified and enabled");

        Ok(VerificationOutcome {
            account: account.profile(),
        })
    }
}
