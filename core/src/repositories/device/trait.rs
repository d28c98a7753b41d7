//! Device repository trait for push-notification endpoint registration.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::device::Device;
use crate::errors::DomainError;

/// Repository trait for Device persistence
///
/// Registration is append-only: registering the same token twice stores two
/// records.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Store a new device record
    async fn create(&self, device: Device) -> Result<Device, DomainError>;

    /// All devices registered for an account, oldest first
    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<Device>, DomainError>;
}
