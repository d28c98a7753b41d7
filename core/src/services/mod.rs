//! Business services containing domain logic and use cases.

pub mod account;
pub mod clock;
pub mod password;
pub mod registration;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use account::AccountService;
pub use clock::{Clock, ManualClock, SystemClock};
pub use password::{validate_password_policy, BcryptPasswordHasher, PasswordHasher};
pub use registration::{
    normalize_client_ip, verification_link, GeoLocationServiceTrait, NotificationServiceTrait,
    RegistrationConfig, RegistrationService,
};
pub use token::{TokenIssuer, TokenService, TokenServiceConfig};
pub use verification::SignupVerificationService;
