//! Inputs and outputs of the onboarding workflows.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::AccountProfile;
use crate::domain::entities::token::SessionTokens;

/// Raw signup request as received from a client.
///
/// Fields are kept as submitted; the registration workflow validates and
/// normalizes them. Blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub device_token: String,
    pub device_type: String,
}

/// Result of a successful signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResult {
    pub tokens: SessionTokens,
    pub account: AccountProfile,
}

/// Result of a successful email verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub account: AccountProfile,
}

/// Everything a notification transport needs to deliver the
/// "confirm your email" message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationNotice {
    pub recipient_name: String,
    pub recipient_email: String,
    /// Human readable origin of the signup request, e.g. "London, England, GB (81.2.69.160)"
    pub origin: String,
    pub token_value: String,
    pub verification_link: String,
}
