//! Mock email service for development and tests
//!
//! Prints messages to the console (optionally), logs them, and keeps a copy
//! of everything sent so tests can read the verification link back.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use hrm_shared::validation::mask_email;

use super::email_service::{EmailMessage, EmailService};
use crate::InfrastructureError;

/// Mock email service
///
/// Clones share counters and captured messages.
#[derive(Clone)]
pub struct MockEmailService {
    /// Number of messages sent since creation or last reset
    message_count: Arc<AtomicU64>,
    /// Messages accepted so far
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    /// Fail every send when set
    simulate_failure: Arc<AtomicBool>,
    /// Print full messages to stdout
    console_output: bool,
}

impl MockEmailService {
    /// Create a mock service that prints to the console
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with explicit options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter and drop captured messages
    pub async fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        self.sent.lock().await.clear();
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Copies of all messages sent so far
    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().await.clone()
    }

    /// Most recent message, if any
    pub async fn last_message(&self) -> Option<EmailMessage> {
        self.sent.lock().await.last().cloned()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to_email);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(to = %masked, "Mock email service simulating failure");
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", message.to_email);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            if let Some(text) = &message.text_body {
                println!("{}", text);
            }
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            subject = %message.subject,
            "Email sent successfully (mock)"
        );

        self.sent.lock().await.push(message.clone());

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
