//! Device entity: a push-notification endpoint registered at signup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client platform of a registered device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Android,
    Ios,
    Web,
}

impl DevicePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevicePlatform::Android => "android",
            DevicePlatform::Ios => "ios",
            DevicePlatform::Web => "web",
        }
    }
}

impl std::fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DevicePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(DevicePlatform::Android),
            "ios" => Ok(DevicePlatform::Ios),
            "web" => Ok(DevicePlatform::Web),
            _ => Err(format!("Unknown device type: {}", s)),
        }
    }
}

/// A device registered against an account. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub account_id: Uuid,
    /// Opaque push identifier supplied by the client
    pub device_token: String,
    pub platform: DevicePlatform,
    pub created_at: DateTime<Utc>,
}

impl Device {
    pub fn new(
        account_id: Uuid,
        device_token: String,
        platform: DevicePlatform,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            device_token,
            platform,
            created_at: now,
        }
    }
}
