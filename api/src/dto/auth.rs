use serde::{Deserialize, Serialize};
use validator::Validate;

use hrm_core::domain::entities::account::AccountProfile;
use hrm_core::domain::value_objects::{SignupInput, SignupResult};

/// Body of `POST /api/v1/auth/signup`
///
/// Every field is optional at the JSON level so a missing field is reported
/// by name instead of as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub email: Option<String>,

    /// bcrypt only reads the first 72 bytes
    #[validate(length(max = 72, message = "must be at most 72 characters"))]
    pub password: Option<String>,

    /// Push notification token (FCM/APNs)
    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub device_token: Option<String>,

    /// "android", "ios" or "web"
    #[validate(length(max = 16, message = "must be at most 16 characters"))]
    pub device_type: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            device_token: request.device_token.unwrap_or_default(),
            device_type: request.device_type.unwrap_or_default(),
        }
    }
}

/// `201 Created` body for a successful signup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub status: u16,
    pub access_token: String,
    pub refresh_token: String,
    pub employee: AccountProfile,
}

impl From<SignupResult> for SignupResponse {
    fn from(result: SignupResult) -> Self {
        Self {
            status: 201,
            access_token: result.tokens.access.value,
            refresh_token: result.tokens.refresh.value,
            employee: result.account,
        }
    }
}
