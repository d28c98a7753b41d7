//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod account_repository_impl;
pub mod device_repository_impl;
pub mod token_repository_impl;

// Re-export the MySQL implementations
pub use account_repository_impl::MySqlAccountRepository;
pub use device_repository_impl::MySqlDeviceRepository;
pub use token_repository_impl::MySqlTokenRepository;

use hrm_core::errors::DomainError;
use uuid::Uuid;

/// Map a failed query to a domain error
///
/// Connectivity and query failures surface as `StorageUnavailable`; the
/// underlying error is logged here and not passed to callers.
pub(crate) fn storage_error(operation: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %error, "Database operation failed");
    DomainError::StorageUnavailable {
        message: format!("Failed to {}", operation),
    }
}

/// Whether the error is a MySQL unique key violation (ER_DUP_ENTRY)
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}

/// Read a column, mapping decode failures to `DomainError::Internal`
pub(crate) fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    use sqlx::Row;

    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Parse a CHAR(36) id column
pub(crate) fn uuid_column(row: &sqlx::mysql::MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}
