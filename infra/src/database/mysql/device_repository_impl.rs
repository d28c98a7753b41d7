//! MySQL implementation of the DeviceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use hrm_core::domain::entities::device::{Device, DevicePlatform};
use hrm_core::errors::DomainError;
use hrm_core::repositories::DeviceRepository;

use super::{column, storage_error, uuid_column};

/// MySQL implementation of DeviceRepository
pub struct MySqlDeviceRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlDeviceRepository {
    /// Create a new MySQL device repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_device(row: &sqlx::mysql::MySqlRow) -> Result<Device, DomainError> {
        let platform: String = column(row, "platform")?;

        Ok(Device {
            id: uuid_column(row, "id")?,
            account_id: uuid_column(row, "account_id")?,
            device_token: column(row, "device_token")?,
            platform: platform
                .parse::<DevicePlatform>()
                .map_err(|message| DomainError::Internal { message })?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl DeviceRepository for MySqlDeviceRepository {
    async fn create(&self, device: Device) -> Result<Device, DomainError> {
        let query = r#"
            INSERT INTO devices (id, account_id, device_token, platform, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(device.id.to_string())
            .bind(device.account_id.to_string())
            .bind(&device.device_token)
            .bind(device.platform.as_str())
            .bind(device.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("register device", e))?;

        Ok(device)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<Device>, DomainError> {
        let query = r#"
            SELECT id, account_id, device_token, platform, created_at
            FROM devices
            WHERE account_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(account_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("find devices", e))?;

        rows.iter().map(Self::row_to_device).collect()
    }
}
