//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing access, refresh and verification JWTs
//! - Persisting issued tokens as records in the token store
//! - Looking up live records and consuming them exactly once

mod config;
mod issuer;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use service::TokenService;
