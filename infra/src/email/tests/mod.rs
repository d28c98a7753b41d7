//! Unit tests for email module

#[cfg(test)]
pub mod adapter_tests;
#[cfg(test)]
pub mod mock_email_tests;

use hrm_core::domain::value_objects::VerificationNotice;

pub(crate) fn sample_notice() -> VerificationNotice {
    VerificationNotice {
        recipient_name: "Jane".to_string(),
        recipient_email: "jane@corp.com".to_string(),
        origin: "London, England, GB (81.2.69.160)".to_string(),
        token_value: "tok.en.value".to_string(),
        verification_link: "https://hrm.test/api/v1/auth/verifysignup/tok.en.value".to_string(),
    }
}
