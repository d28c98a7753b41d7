//! JWT signing and decoding

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::account::Role;
use crate::domain::entities::token::{Claims, IssuedToken, SessionTokens, TokenUse};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

use super::config::TokenServiceConfig;

/// Signs and decodes the service's JWTs.
///
/// The signing secret is read once at construction.
pub struct TokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Creates a new issuer
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Internal)` - empty secret, a non-HMAC algorithm or a
    ///   lifetime that is not positive
    pub fn new(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        for (name, ttl) in [
            ("access", config.access_token_ttl),
            ("refresh", config.refresh_token_ttl),
            ("verification", config.verification_token_ttl),
        ] {
            if ttl <= Duration::zero() {
                return Err(DomainError::Internal {
                    message: format!("{} token lifetime must be positive", name),
                });
            }
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Internal {
                message: format!("Unsupported signing algorithm: {:?}", config.algorithm),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Sign a token for `subject` valid for `ttl` from now
    pub fn issue(
        &self,
        subject: Uuid,
        role: Option<Role>,
        token_use: TokenUse,
        ttl: Duration,
    ) -> Result<IssuedToken, DomainError> {
        let now = self.clock.now();
        let claims = Claims::new(
            subject,
            role,
            token_use,
            &self.config.issuer,
            &self.config.audience,
            now,
            ttl,
        );
        let value = self.encode_jwt(&claims)?;

        Ok(IssuedToken {
            value,
            expires_at: now + ttl,
        })
    }

    /// Access + refresh pair. Only the access token carries the role.
    pub fn issue_session(&self, subject: Uuid, role: Role) -> Result<SessionTokens, DomainError> {
        let access = self.issue(
            subject,
            Some(role),
            TokenUse::Access,
            self.config.access_token_ttl,
        )?;
        let refresh = self.issue(
            subject,
            None,
            TokenUse::Refresh,
            self.config.refresh_token_ttl,
        )?;
        Ok(SessionTokens { access, refresh })
    }

    /// Email verification token
    pub fn issue_verification(&self, subject: Uuid, role: Role) -> Result<IssuedToken, DomainError> {
        self.issue(
            subject,
            Some(role),
            TokenUse::Verification,
            self.config.verification_token_ttl,
        )
    }

    /// Decode a token and check it was issued for `expected` use
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn decode(&self, token: &str, expected: TokenUse) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::Expired),
                ErrorKind::ImmatureSignature => DomainError::Token(TokenError::NotYetValid),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::Malformed),
            })?;

        if token_data.claims.token_use != expected {
            return Err(DomainError::Token(TokenError::Malformed));
        }

        Ok(token_data.claims)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::SigningFailed {
                reason: e.to_string(),
            })
        })
    }
}
