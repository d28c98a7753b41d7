//! Email Service Interface

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::InfrastructureError;

/// An outbound email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to_email: String,
    /// Recipient display name
    pub to_name: Option<String>,
    pub subject: String,
    pub html_body: String,
    /// Plain text alternative
    pub text_body: Option<String>,
}

/// Email service trait for sending messages
///
/// Implementations include:
/// - SendGrid v3 API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email
    ///
    /// # Arguments
    ///
    /// * `message` - The message to deliver
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
