//! Email-backed notification service for the registration workflow

use async_trait::async_trait;
use std::sync::Arc;

use hrm_core::domain::value_objects::VerificationNotice;
use hrm_core::services::clock::Clock;
use hrm_core::services::registration::NotificationServiceTrait;

use super::email_service::EmailService;
use super::template::render_verification_email;

/// Sends verification notices as emails
#[derive(Clone)]
pub struct EmailNotificationAdapter {
    email_service: Arc<dyn EmailService>,
    clock: Arc<dyn Clock>,
}

impl EmailNotificationAdapter {
    pub fn new(email_service: Arc<dyn EmailService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            email_service,
            clock,
        }
    }

    /// Name of the underlying email provider
    pub fn provider_name(&self) -> &str {
        self.email_service.provider_name()
    }
}

#[async_trait]
impl NotificationServiceTrait for EmailNotificationAdapter {
    async fn send_verification(&self, notice: &VerificationNotice) -> Result<String, String> {
        let message = render_verification_email(notice, self.clock.now());
        self.email_service
            .send_email(&message)
            .await
            .map_err(|e| e.to_string())
    }
}
