//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// SendGrid v3 mail send API
    SendGrid,
    /// Log-only provider for development and tests
    Mock,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sendgrid" => Ok(EmailProvider::SendGrid),
            "mock" => Ok(EmailProvider::Mock),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Active provider
    pub provider: EmailProvider,

    /// SendGrid API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// SendGrid API base URL
    pub api_base_url: String,

    /// Sender address
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// HTTP timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            api_key: None,
            api_base_url: String::from("https://api.sendgrid.com"),
            from_address: String::from("contact@plusequalsto.com"),
            from_name: String::from("PlusPay by Plus Equals To"),
            timeout_seconds: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// Falls back to the mock provider when no SendGrid key is configured.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("SENDGRID_API_KEY").ok().filter(|k| !k.is_empty());
        let provider = std::env::var("EMAIL_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(if api_key.is_some() {
                EmailProvider::SendGrid
            } else {
                EmailProvider::Mock
            });
        let timeout_seconds = std::env::var("EMAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            provider,
            api_key,
            api_base_url: std::env::var("SENDGRID_API_URL").unwrap_or(defaults.api_base_url),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            timeout_seconds,
        }
    }
}
