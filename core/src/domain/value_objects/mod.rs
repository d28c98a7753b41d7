//! Value objects representing immutable domain concepts.

pub mod onboarding;

// Re-export commonly used types
pub use onboarding::{SignupInput, SignupResult, VerificationNotice, VerificationOutcome};
