//! Unit tests for the in-memory device repository

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::device::{Device, DevicePlatform};
use crate::repositories::device::{DeviceRepository, InMemoryDeviceRepository};

#[tokio::test]
async fn test_registration_is_append_only() {
    let repo = InMemoryDeviceRepository::new();
    let account_id = Uuid::new_v4();

    for _ in 0..2 {
        repo.create(Device::new(
            account_id,
            "push-token-1".to_string(),
            DevicePlatform::Ios,
            Utc::now(),
        ))
        .await
        .unwrap();
    }
    repo.create(Device::new(
        Uuid::new_v4(),
        "other".to_string(),
        DevicePlatform::Web,
        Utc::now(),
    ))
    .await
    .unwrap();

    let devices = repo.find_by_account(account_id).await.unwrap();
    assert_eq!(devices.len(), 2);
    assert!(devices.iter().all(|d| d.device_token == "push-token-1"));
    assert_ne!(devices[0].id, devices[1].id);
    assert_eq!(repo.len().await, 3);
}
