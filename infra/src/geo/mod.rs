//! IP geolocation
//!
//! Resolves the client IP of a signup request into the human readable
//! origin shown in the verification email.

pub mod ipinfo;
pub mod static_locator;

pub use ipinfo::{IpInfoGeoLocator, IpInfoResponse};
pub use static_locator::StaticGeoLocator;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use std::sync::Arc;

use hrm_core::services::registration::GeoLocationServiceTrait;

use crate::config::{GeoConfig, GeoProvider};
use crate::InfrastructureError;

/// Geolocation provider selected at startup
#[derive(Clone)]
pub struct GeoLocator {
    inner: Arc<dyn GeoLocationServiceTrait>,
    provider: GeoProvider,
}

impl GeoLocator {
    pub fn provider(&self) -> GeoProvider {
        self.provider
    }
}

#[async_trait]
impl GeoLocationServiceTrait for GeoLocator {
    async fn locate(&self, ip: &str) -> Result<String, String> {
        self.inner.locate(ip).await
    }
}

/// Create a geolocation service based on configuration
pub fn create_geo_locator(config: &GeoConfig) -> Result<GeoLocator, InfrastructureError> {
    let inner: Arc<dyn GeoLocationServiceTrait> = match config.provider {
        GeoProvider::IpInfo => Arc::new(IpInfoGeoLocator::new(config)?),
        GeoProvider::Static => {
            tracing::info!("Using static geolocation; signup origins are not resolved");
            Arc::new(StaticGeoLocator::default())
        }
    };

    Ok(GeoLocator {
        inner,
        provider: config.provider,
    })
}
