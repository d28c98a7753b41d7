//! Email verification workflow
//!
//! Consumes a single-use verification token and activates the account it
//! was issued for.

mod service;


pub use service::SignupVerificationService;
