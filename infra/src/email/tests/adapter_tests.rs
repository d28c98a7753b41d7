//! Unit tests for the email notification adapter

use chrono::{TimeZone, Utc};
use std::sync::Arc;

use hrm_core::services::clock::ManualClock;
use hrm_core::services::registration::NotificationServiceTrait;

use super::sample_notice;
use crate::email::{EmailNotificationAdapter, MockEmailService};

fn adapter(mock: &MockEmailService) -> EmailNotificationAdapter {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 14, 4, 0).unwrap());
    EmailNotificationAdapter::new(Arc::new(mock.clone()), Arc::new(clock))
}

#[tokio::test]
async fn test_adapter_sends_rendered_email() {
    let mock = MockEmailService::with_options(false, false);
    let adapter = adapter(&mock);

    let message_id = adapter.send_verification(&sample_notice()).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(adapter.provider_name(), "Mock");
    let sent = mock.last_message().await.unwrap();
    assert_eq!(sent.to_email, "jane@corp.com");
    assert!(sent.html_body.contains("19 October at 3:04 pm BST"));
}

#[tokio::test]
async fn test_adapter_reports_delivery_failure() {
    let mock = MockEmailService::with_options(false, true);
    let adapter = adapter(&mock);

    let error = adapter.send_verification(&sample_notice()).await.unwrap_err();

    assert!(error.contains("Simulated email sending failure"));
}
