//! SendGrid email delivery via the v3 mail send API

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use hrm_shared::validation::mask_email;

use super::email_service::{EmailMessage, EmailService};
use crate::config::EmailConfig;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendGridAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendGridPersonalization {
    to: Vec<SendGridAddress>,
}

#[derive(Debug, Serialize)]
struct SendGridContent {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendGridMailBody {
    personalizations: Vec<SendGridPersonalization>,
    from: SendGridAddress,
    subject: String,
    content: Vec<SendGridContent>,
}

impl SendGridMailBody {
    /// SendGrid requires `text/plain` to precede `text/html`
    pub(crate) fn new(from_email: &str, from_name: &str, message: &EmailMessage) -> Self {
        let mut content = Vec::with_capacity(2);
        if let Some(text) = &message.text_body {
            content.push(SendGridContent {
                content_type: "text/plain",
                value: text.clone(),
            });
        }
        content.push(SendGridContent {
            content_type: "text/html",
            value: message.html_body.clone(),
        });

        Self {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridAddress {
                    email: message.to_email.clone(),
                    name: message.to_name.clone(),
                }],
            }],
            from: SendGridAddress {
                email: from_email.to_string(),
                name: Some(from_name.to_string()).filter(|n| !n.is_empty()),
            },
            subject: message.subject.clone(),
            content,
        }
    }
}

/// SendGrid-backed email service
pub struct SendGridEmailService {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from_address: String,
    from_name: String,
}

impl SendGridEmailService {
    /// Create a SendGrid client from configuration
    ///
    /// Fails if no API key is configured.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("SENDGRID_API_KEY is required".to_string())
            })?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/v3/mail/send", config.api_base_url.trim_end_matches('/')),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
        })
    }
}

#[async_trait]
impl EmailService for SendGridEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let body = SendGridMailBody::new(&self.from_address, &self.from_name, message);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(
                provider = "sendgrid",
                status = %status,
                to = %mask_email(&message.to_email),
                "Email send rejected"
            );
            return Err(InfrastructureError::Email(format!(
                "SendGrid send failed (status={}): {}",
                status, text
            )));
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        tracing::info!(
            target: "email_service",
            provider = "sendgrid",
            to = %mask_email(&message.to_email),
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SendGrid"
    }
}
