//! Token entities: signed JWT claims and the persisted token records
//! that make verification and session tokens revocable and single-use.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

use super::account::Role;

/// Verification token expiration time (15 minutes)
pub const VERIFICATION_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "plushrm";

/// JWT audience
pub const JWT_AUDIENCE: &str = "plushrm-api";

/// Kind of a persisted token record.
///
/// The numeric codes are part of the storage format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TokenKind {
    /// Single-use email verification token
    Verification = 1,
    /// Access/refresh pair issued at signup
    Session = 2,
    /// Reserved for the password reset flow; never issued
    PasswordReset = 3,
}

impl TokenKind {
    /// Stable wire/storage code
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<TokenKind> for u8 {
    fn from(kind: TokenKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TokenKind::Verification),
            2 => Ok(TokenKind::Session),
            3 => Ok(TokenKind::PasswordReset),
            other => Err(format!("Unknown token kind code: {}", other)),
        }
    }
}

/// What a signed token may be used for; carried in the `use` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    Access,
    Refresh,
    Verification,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Role snapshot; absent on refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Intended use of the token
    #[serde(rename = "use")]
    pub token_use: TokenUse,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID; makes every issued value unique
    pub jti: String,
}

impl Claims {
    /// Build claims valid from `now` for `ttl`
    pub fn new(
        subject: Uuid,
        role: Option<Role>,
        token_use: TokenUse,
        issuer: &str,
        audience: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            role,
            token_use,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse the subject back into an account ID
    pub fn subject_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// A freshly signed token and the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Access + refresh pair returned to the client at signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// Persisted token record.
///
/// A record is consumable while it exists and `now < expires_at`. Single
/// use is expressed by deleting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    /// Role at issuance
    pub role: Role,
    /// Signed token value; for verification records, the verification token
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub kind: TokenKind,
    pub created_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Creates a new record, rejecting expiries that are not in the future
    pub fn new(
        account_id: Uuid,
        role: Role,
        access_token: String,
        refresh_token: Option<String>,
        kind: TokenKind,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if expires_at <= now {
            return Err(DomainError::Validation {
                message: "Token record must expire after it is created".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            account_id,
            role,
            access_token,
            refresh_token,
            expires_at,
            kind,
            created_at: now,
        })
    }

    /// Whether the record may still be consumed at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
