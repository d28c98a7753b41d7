//! Registration workflow
//!
//! Turns a signup request into an unverified account, a registered device,
//! a session token pair and a pending email verification:
//! - input validation and normalization
//! - best-effort origin lookup for the notification
//! - account creation through the hashing write path
//! - token issuance and persistence
//! - verification notice dispatch

mod config;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::RegistrationConfig;
pub use service::{verification_link, RegistrationService};
pub use traits::{normalize_client_ip, GeoLocationServiceTrait, NotificationServiceTrait};
