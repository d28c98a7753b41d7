//! ipinfo.io lookups

use async_trait::async_trait;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

use hrm_core::services::registration::GeoLocationServiceTrait;

use crate::config::GeoConfig;
use crate::InfrastructureError;

/// Fields used from an ipinfo.io response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpInfoResponse {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    /// Set for private and reserved addresses
    #[serde(default)]
    pub bogon: bool,
}

impl IpInfoResponse {
    /// Format as `"city, region, country (ip)"`
    ///
    /// Missing parts are skipped. Returns `None` when nothing but the IP is
    /// known.
    pub fn describe(&self, requested_ip: &str) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return None;
        }

        let ip = self.ip.as_deref().unwrap_or(requested_ip);
        Some(format!("{} ({})", parts.join(", "), ip))
    }
}

/// Geolocation through the ipinfo.io API
pub struct IpInfoGeoLocator {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl IpInfoGeoLocator {
    pub fn new(config: &GeoConfig) -> Result<Self, InfrastructureError> {
        if config.token.is_none() {
            tracing::warn!("IPINFO_TOKEN not set; ipinfo.io lookups are rate limited");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    async fn fetch(&self, ip: IpAddr) -> Result<IpInfoResponse, InfrastructureError> {
        let mut request = self
            .client
            .get(format!("{}/{}", self.base_url, ip))
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Geo(format!(
                "ipinfo lookup failed (status={}): {}",
                status, body
            )));
        }

        Ok(response.json::<IpInfoResponse>().await?)
    }
}

#[async_trait]
impl GeoLocationServiceTrait for IpInfoGeoLocator {
    async fn locate(&self, ip: &str) -> Result<String, String> {
        // Client-supplied header value; only a parsed address goes into the URL
        let addr = ip
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| format!("Invalid IP address: {:?}", ip))?;

        let info = self.fetch(addr).await.map_err(|e| e.to_string())?;

        if info.bogon {
            return Err(format!("{} is a private or reserved address", ip));
        }

        info.describe(ip)
            .ok_or_else(|| format!("No location data for {}", ip))
    }
}
