//! Integration tests: signup sends a real rendered email whose link verifies the account

use std::sync::Arc;

use hrm_core::domain::value_objects::SignupInput;
use hrm_core::errors::{AuthError, DomainError};
use hrm_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryDeviceRepository, InMemoryTokenRepository,
};
use hrm_core::services::{
    AccountService, BcryptPasswordHasher, Clock, RegistrationConfig, RegistrationService,
    SignupVerificationService, SystemClock, TokenService, TokenServiceConfig,
};
use hrm_infra::email::{EmailNotificationAdapter, MockEmailService};
use hrm_infra::geo::StaticGeoLocator;

const BASE_URL: &str = "https://hrm.test/api/v1";

struct Services {
    accounts: Arc<InMemoryAccountRepository>,
    mailer: MockEmailService,
    registration: RegistrationService<
        InMemoryAccountRepository,
        BcryptPasswordHasher,
        InMemoryDeviceRepository,
        InMemoryTokenRepository,
        EmailNotificationAdapter,
        StaticGeoLocator,
    >,
    verification: SignupVerificationService<
        InMemoryAccountRepository,
        BcryptPasswordHasher,
        InMemoryTokenRepository,
    >,
}

fn services() -> Services {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let mailer = MockEmailService::with_options(false, false);

    let account_service = Arc::new(AccountService::new(
        accounts.clone(),
        Arc::new(BcryptPasswordHasher::new(BcryptPasswordHasher::MIN_COST)),
        clock.clone(),
    ));
    let token_service = Arc::new(
        TokenService::new(
            InMemoryTokenRepository::new(),
            TokenServiceConfig::default(),
            clock.clone(),
        )
        .unwrap(),
    );

    let registration = RegistrationService::new(
        account_service.clone(),
        Arc::new(InMemoryDeviceRepository::new()),
        token_service.clone(),
        Arc::new(EmailNotificationAdapter::new(
            Arc::new(mailer.clone()),
            clock.clone(),
        )),
        Arc::new(StaticGeoLocator::new("London, England, GB")),
        clock,
        RegistrationConfig::with_base_url(BASE_URL),
    );
    let verification = SignupVerificationService::new(account_service, token_service);

    Services {
        accounts,
        mailer,
        registration,
        verification,
    }
}

fn signup_input() -> SignupInput {
    SignupInput {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@corp.com".to_string(),
        password: "Abcdef1!".to_string(),
        device_token: "fcm-token".to_string(),
        device_type: "android".to_string(),
    }
}

fn token_from_link(text: &str) -> String {
    let prefix = format!("{}/auth/verifysignup/", BASE_URL);
    let start = text.find(&prefix).unwrap() + prefix.len();
    text[start..]
        .split(|c: char| c.is_whitespace())
        .next()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_signup_email_link_verifies_account() {
    let services = services();

    let result = services
        .registration
        .sign_up(signup_input(), Some("::ffff:81.2.69.160"))
        .await
        .unwrap();

    let email = services.mailer.last_message().await.unwrap();
    assert_eq!(email.to_email, "jane@corp.com");
    assert!(email.html_body.contains("London, England, GB (81.2.69.160)"));

    let token = token_from_link(email.text_body.as_deref().unwrap());
    let outcome = services.verification.verify_signup(&token).await.unwrap();
    assert_eq!(outcome.account.id, result.account.id);

    let stored = services
        .accounts
        .find_by_id(result.account.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.verified && stored.enabled);

    // Second use of the same link fails
    assert!(services.verification.verify_signup(&token).await.is_err());
}

#[tokio::test]
async fn test_email_failure_surfaces_as_notification_error() {
    let services = services();
    services.mailer.set_simulate_failure(true);

    let result = services.registration.sign_up(signup_input(), None).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NotificationFailed { .. }))
    ));
    // Account creation is not rolled back
    assert_eq!(services.accounts.len().await, 1);
}
