//! Fixed-answer geolocation for development and tests

use async_trait::async_trait;

use hrm_core::services::registration::GeoLocationServiceTrait;

/// Returns the same place for every address
#[derive(Debug, Clone)]
pub struct StaticGeoLocator {
    location: String,
}

impl StaticGeoLocator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Default for StaticGeoLocator {
    fn default() -> Self {
        Self::new("Local network")
    }
}

#[async_trait]
impl GeoLocationServiceTrait for StaticGeoLocator {
    async fn locate(&self, ip: &str) -> Result<String, String> {
        Ok(format!("{} ({})", self.location, ip))
    }
}
