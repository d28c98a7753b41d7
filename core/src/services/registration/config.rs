//! Configuration for the registration workflow

use crate::domain::entities::account::Role;

/// Configuration for the registration workflow
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Public API base URL used to build verification links,
    /// e.g. `https://hrm.example.com/api/v1`
    pub verification_base_url: String,
    /// Role given to self-registered accounts
    pub default_role: Role,
    /// Origin shown in the notice when the lookup fails
    pub unknown_location: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            verification_base_url: "http://localhost:8080/api/v1".to_string(),
            default_role: Role::Employee,
            unknown_location: "Unknown location".to_string(),
        }
    }
}

impl RegistrationConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            verification_base_url: base_url.into(),
            ..Default::default()
        }
    }
}
