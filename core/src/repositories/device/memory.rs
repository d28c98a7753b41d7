//! In-memory implementation of DeviceRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::device::Device;
use crate::errors::DomainError;

use super::trait_::DeviceRepository;

/// Process-local device store for development and tests
#[derive(Clone, Default)]
pub struct InMemoryDeviceRepository {
    devices: Arc<RwLock<Vec<Device>>>,
}

impl InMemoryDeviceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored devices
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn create(&self, device: Device) -> Result<Device, DomainError> {
        self.devices.write().await.push(device.clone());
        Ok(device)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<Device>, DomainError> {
        let devices = self.devices.read().await;
        Ok(devices
            .iter()
            .filter(|d| d.account_id == account_id)
            .cloned()
            .collect())
    }
}
