//! Main registration service implementation

use std::sync::Arc;

use hrm_shared::validation::{is_valid_email, mask_email, normalize_email, not_blank};

use crate::domain::entities::account::NewAccount;
use crate::domain::entities::device::{Device, DevicePlatform};
use crate::domain::value_objects::{SignupInput, SignupResult, VerificationNotice};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, DeviceRepository, TokenRepository};
use crate::services::account::AccountService;
use crate::services::clock::Clock;
use crate::services::password::{validate_password_policy, PasswordHasher};
use crate::services::token::TokenService;

use super::config::RegistrationConfig;
use super::traits::{normalize_client_ip, GeoLocationServiceTrait, NotificationServiceTrait};

/// Build the link a user follows to confirm their email address
pub fn verification_link(base_url: &str, token: &str) -> String {
    format!("{}/auth/verifysignup/{}", base_url.trim_end_matches('/'), token)
}

/// Signup request after validation
struct ValidatedSignup {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    device_token: String,
    platform: DevicePlatform,
}

/// Registration service orchestrating employee signup
pub struct RegistrationService<A, H, D, T, N, G>
where
    A: AccountRepository,
    H: PasswordHasher + 'static,
    D: DeviceRepository,
    T: TokenRepository,
    N: NotificationServiceTrait,
    G: GeoLocationServiceTrait,
{
    /// Account write path (hashes credentials)
    account_service: Arc<AccountService<A, H>>,
    /// Device registration store
    device_repository: Arc<D>,
    /// Token issuance and persistence
    token_service: Arc<TokenService<T>>,
    /// Verification notice delivery
    notification_service: Arc<N>,
    /// Client IP to location lookup
    geo_service: Arc<G>,
    clock: Arc<dyn Clock>,
    config: RegistrationConfig,
}

impl<A, H, D, T, N, G> RegistrationService<A, H, D, T, N, G>
where
    A: AccountRepository,
    H: PasswordHasher + 'static,
    D: DeviceRepository,
    T: TokenRepository,
    N: NotificationServiceTrait,
    G: GeoLocationServiceTrait,
{
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `account_service` - Account write path
    /// * `device_repository` - Repository for device records
    /// * `token_service` - Service for JWT issuance and the token store
    /// * `notification_service` - Delivers the verification notice
    /// * `geo_service` - Resolves the client IP for the notice
    /// * `clock` - Time source
    /// * `config` - Service configuration
    pub fn new(
        account_service: Arc<AccountService<A, H>>,
        device_repository: Arc<D>,
        token_service: Arc<TokenService<T>>,
        notification_service: Arc<N>,
        geo_service: Arc<G>,
        clock: Arc<dyn Clock>,
        config: RegistrationConfig,
    ) -> Self {
        Self {
            account_service,
            device_repository,
            token_service,
            notification_service,
            geo_service,
            clock,
            config,
        }
    }

    /// Register a new employee account
    ///
    /// This method:
    /// 1. Validates the request (all fields required, email shape, password policy, device type)
    /// 2. Resolves the client's location for the notice (failures are logged, not fatal)
    /// 3. Rejects emails that are already registered
    /// 4. Creates the account unverified and disabled
    /// 5. Registers the device
    /// 6. Issues and records the session token pair
    /// 7. Issues and records the verification token
    /// 8. Sends the verification notice
    ///
    /// Steps are not rolled back: if step 8 fails the account stays
    /// unverified and its verification token is never delivered.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw signup request
    /// * `client_ip` - Client IP as seen by the transport, if known
    ///
    /// # Returns
    ///
    /// * `Ok(SignupResult)` - Session tokens and the public account profile
    /// * `Err(DomainError)` - Validation, conflict, storage or notification failure
    pub async fn sign_up(
        &self,
        input: SignupInput,
        client_ip: Option<&str>,
    ) -> DomainResult<SignupResult> {
        // Step 1: Validate and normalize input
        let signup = validate_signup(input)?;
        let masked_email = mask_email(&signup.email);
        tracing::info!(email = %masked_email, platform = %signup.platform, "Signup requested");

        // Step 2: Resolve origin for the notice
        let origin = self.resolve_origin(client_ip).await;

        // Step 3: Check for an existing account
        if self.account_service.email_exists(&signup.email).await? {
            tracing::info!(email = %masked_email, "Signup rejected: email already registered");
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        // Step 4: Create the account through the hashing write path
        let account = self
            .account_service
            .create(NewAccount {
                first_name: signup.first_name,
                last_name: signup.last_name,
                email: signup.email,
                password: signup.password,
                role: self.config.default_role,
            })
            .await?;

        // Step 5: Register the device
        let device = Device::new(
            account.id,
            signup.device_token,
            signup.platform,
            self.clock.now(),
        );
        self.device_repository.create(device).await?;

        // Step 6: Session tokens
        let tokens = self.token_service.issue_session_tokens(&account).await?;

        // Step 7: Verification token
        let verification = self.token_service.issue_verification_token(&account).await?;

        // Step 8: Send the verification notice
        let notice = VerificationNotice {
            recipient_name: account.first_name.clone(),
            recipient_email: account.email.clone(),
            origin,
            verification_link: verification_link(
                &self.config.verification_base_url,
                &verification.value,
            ),
            token_value: verification.value,
        };
        let message_id = self
            .notification_service
            .send_verification(&notice)
            .await
            .map_err(|reason| {
                tracing::error!(
                    account_id = %account.id,
                    email = %masked_email,
                    error = %reason,
                    "Failed to send verification email"
                );
                DomainError::Auth(AuthError::NotificationFailed { reason })
            })?;

        tracing::info!(
            account_id = %account.id,
            email = %masked_email,
            message_id = %message_id,
            "Signup completed, verification email sent"
        );

        Ok(SignupResult {
            tokens,
            account: account.profile(),
        })
    }

    async fn resolve_origin(&self, client_ip: Option<&str>) -> String {
        let ip = match client_ip.map(normalize_client_ip).filter(|ip| !ip.is_empty()) {
            Some(ip) => ip,
            None => return self.config.unknown_location.clone(),
        };

        match self.geo_service.locate(ip).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(ip = %ip, error = %e, "Geolocation lookup failed");
                self.config.unknown_location.clone()
            }
        }
    }
}

fn required(value: String, field: &str) -> Result<String, ValidationError> {
    if not_blank(&value) {
        Ok(value)
    } else {
        Err(ValidationError::RequiredField {
            field: field.to_string(),
        })
    }
}

fn validate_signup(input: SignupInput) -> Result<ValidatedSignup, ValidationError> {
    let first_name = required(input.first_name, "firstName")?;
    let last_name = required(input.last_name, "lastName")?;
    let email = required(input.email, "email")?;
    let password = required(input.password, "password")?;
    let device_token = required(input.device_token, "deviceToken")?;
    let device_type = required(input.device_type, "deviceType")?;

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_password_policy(&password)?;

    let platform = device_type
        .parse::<DevicePlatform>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "deviceType".to_string(),
        })?;

    Ok(ValidatedSignup {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email,
        password,
        device_token: device_token.trim().to_string(),
        platform,
    })
}
