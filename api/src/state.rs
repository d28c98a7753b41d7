//! Application state shared by request handlers

use std::sync::Arc;

use hrm_core::errors::DomainError;
use hrm_core::repositories::{AccountRepository, DeviceRepository, TokenRepository};
use hrm_core::services::{
    AccountService, BcryptPasswordHasher, Clock, GeoLocationServiceTrait,
    NotificationServiceTrait, RegistrationConfig, RegistrationService, SignupVerificationService,
    TokenService, TokenServiceConfig,
};
use hrm_infra::database::DatabasePool;
use hrm_shared::AppConfig;

/// Storage backends for one application instance
pub struct Repositories<A, D, T> {
    pub accounts: A,
    pub devices: D,
    pub tokens: T,
}

/// Application state that holds shared services
pub struct AppState<A, D, T, N, G>
where
    A: AccountRepository,
    D: DeviceRepository,
    T: TokenRepository,
    N: NotificationServiceTrait,
    G: GeoLocationServiceTrait,
{
    pub registration_service: Arc<RegistrationService<A, BcryptPasswordHasher, D, T, N, G>>,
    pub verification_service: Arc<SignupVerificationService<A, BcryptPasswordHasher, T>>,
}

/// Dependencies probed by the health endpoint
#[derive(Clone, Default)]
pub struct HealthState {
    /// Present when running against MySQL
    pub database: Option<DatabasePool>,
}

/// Wire the onboarding services over the given stores and collaborators
///
/// # Arguments
///
/// * `config` - Loaded application configuration
/// * `repositories` - Account, device and token stores
/// * `notifier` - Delivers verification notices
/// * `geo` - Resolves client IPs for the notice
/// * `clock` - Time source shared by every service
///
/// # Returns
///
/// * `Ok(AppState)` - Ready to hand to [`create_app`](crate::create_app)
/// * `Err(DomainError)` - The token signing configuration is unusable
pub fn build_state<A, D, T, N, G>(
    config: &AppConfig,
    repositories: Repositories<A, D, T>,
    notifier: N,
    geo: G,
    clock: Arc<dyn Clock>,
) -> Result<AppState<A, D, T, N, G>, DomainError>
where
    A: AccountRepository,
    D: DeviceRepository,
    T: TokenRepository,
    N: NotificationServiceTrait,
    G: GeoLocationServiceTrait,
{
    let account_service = Arc::new(AccountService::new(
        Arc::new(repositories.accounts),
        Arc::new(BcryptPasswordHasher::new(config.auth.password.hash_cost)),
        clock.clone(),
    ));
    let token_service = Arc::new(TokenService::new(
        repositories.tokens,
        TokenServiceConfig::from(&config.auth.jwt),
        clock.clone(),
    )?);

    let registration_service = RegistrationService::new(
        account_service.clone(),
        Arc::new(repositories.devices),
        token_service.clone(),
        Arc::new(notifier),
        Arc::new(geo),
        clock,
        RegistrationConfig::with_base_url(config.server.public_base_url.clone()),
    );
    let verification_service = SignupVerificationService::new(account_service, token_service);

    Ok(AppState {
        registration_service: Arc::new(registration_service),
        verification_service: Arc::new(verification_service),
    })
}
