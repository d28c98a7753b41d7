//! IP geolocation configuration

use serde::{Deserialize, Serialize};

/// Geolocation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoProvider {
    /// ipinfo.io lookup API
    IpInfo,
    /// Fixed answer, no network
    Static,
}

impl std::str::FromStr for GeoProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ipinfo" => Ok(GeoProvider::IpInfo),
            "static" | "mock" => Ok(GeoProvider::Static),
            _ => Err(format!("Invalid geolocation provider: {}", s)),
        }
    }
}

/// Geolocation service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoConfig {
    /// Active provider
    pub provider: GeoProvider,

    /// ipinfo.io access token
    #[serde(default)]
    pub token: Option<String>,

    /// ipinfo.io base URL
    pub api_base_url: String,

    /// HTTP timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            provider: GeoProvider::Static,
            token: None,
            api_base_url: String::from("https://ipinfo.io"),
            timeout_seconds: 5,
        }
    }
}

impl GeoConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let token = std::env::var("IPINFO_TOKEN").ok().filter(|t| !t.is_empty());
        let provider = std::env::var("GEO_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(if token.is_some() {
                GeoProvider::IpInfo
            } else {
                GeoProvider::Static
            });

        Self {
            provider,
            token,
            api_base_url: std::env::var("IPINFO_API_URL").unwrap_or(defaults.api_base_url),
            timeout_seconds: std::env::var("GEO_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }
}
