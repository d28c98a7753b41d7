//! Email Service Module
//!
//! This module delivers account emails, currently the signup verification
//! notice. It includes a SendGrid implementation and a mock implementation
//! for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **SendGrid**: Production delivery via the v3 mail send API
//! - **Mock Implementation**: Console output and message capture for development
//! - **Template Rendering**: Verification email with link, origin and timestamp
//! - **Notification Adapter**: Bridges email delivery to the registration workflow

pub mod adapter;
pub mod email_service;
pub mod mock_email;
pub mod sendgrid;
pub mod template;

// Re-export commonly used types
pub use adapter::EmailNotificationAdapter;
pub use email_service::{EmailMessage, EmailService};
pub use mock_email::MockEmailService;
pub use sendgrid::SendGridEmailService;
pub use template::{render_verification_email, VERIFICATION_EMAIL_SUBJECT};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::config::{EmailConfig, EmailProvider};
use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// # Arguments
///
/// * `config` - Email configuration containing provider settings
///
/// # Returns
///
/// The configured email service, or a configuration error when the
/// selected provider is missing credentials
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailService>, InfrastructureError> {
    match config.provider {
        EmailProvider::SendGrid => Ok(Arc::new(SendGridEmailService::new(config)?)),
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service; verification emails are not delivered");
            Ok(Arc::new(MockEmailService::new()))
        }
    }
}
