//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository implementations for accounts, devices and tokens
//! - Schema migrations (`infra/migrations`)

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlAccountRepository, MySqlDeviceRepository, MySqlTokenRepository};
