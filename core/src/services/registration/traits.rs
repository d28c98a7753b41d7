//! Traits for notification and geolocation integration

use async_trait::async_trait;

use crate::domain::value_objects::VerificationNotice;

/// Trait for delivering the "confirm your email" notice
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Deliver the notice; returns a provider message ID
    async fn send_verification(&self, notice: &VerificationNotice) -> Result<String, String>;
}

/// Trait for resolving a client IP to a human readable location
#[async_trait]
pub trait GeoLocationServiceTrait: Send + Sync {
    /// Resolve `ip` to something like `"London, England, GB (81.2.69.160)"`
    async fn locate(&self, ip: &str) -> Result<String, String>;
}

/// Strip the IPv4-mapped IPv6 prefix (`::ffff:10.0.0.1` -> `10.0.0.1`)
pub fn normalize_client_ip(ip: &str) -> &str {
    let ip = ip.trim();
    ip.strip_prefix("::ffff:").unwrap_or(ip)
}
