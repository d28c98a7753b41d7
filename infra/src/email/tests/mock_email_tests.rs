//! Unit tests for mock email service

use crate::email::{EmailMessage, EmailService, MockEmailService};
use crate::InfrastructureError;

fn message(to: &str) -> EmailMessage {
    EmailMessage {
        to_email: to.to_string(),
        to_name: None,
        subject: "Hello".to_string(),
        html_body: "<p>Hello</p>".to_string(),
        text_body: Some("Hello".to_string()),
    }
}

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::with_options(false, false);

    let message_id = service.send_email(&message("jane@corp.com")).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(
        service.last_message().await.map(|m| m.to_email),
        Some("jane@corp.com".to_string())
    );
}

#[tokio::test]
async fn test_mock_email_simulate_failure() {
    let service = MockEmailService::with_options(false, false);
    service.set_simulate_failure(true);

    let result = service.send_email(&message("jane@corp.com")).await;

    assert!(matches!(result, Err(InfrastructureError::Email(_))));
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_mock_email_counter_and_reset() {
    let service = MockEmailService::with_options(false, false);

    for i in 1..=3 {
        service
            .send_email(&message(&format!("user{}@corp.com", i)))
            .await
            .unwrap();
        assert_eq!(service.get_message_count(), i);
    }

    service.reset_counter().await;
    assert_eq!(service.get_message_count(), 0);
    assert!(service.last_message().await.is_none());
}

#[tokio::test]
async fn test_mock_email_clones_share_state() {
    let service = MockEmailService::with_options(false, false);
    let handle = service.clone();

    service.send_email(&message("jane@corp.com")).await.unwrap();

    assert_eq!(handle.get_message_count(), 1);
    assert_eq!(handle.sent_messages().await.len(), 1);
}
