//! MySQL implementation of the AccountRepository trait.
//!
//! Email uniqueness is enforced by the `uk_accounts_email` index; a losing
//! concurrent insert gets a duplicate-key error, which is reported as
//! `EmailAlreadyRegistered`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use hrm_core::domain::entities::account::{Account, Role};
use hrm_core::errors::{AuthError, DomainError};
use hrm_core::repositories::AccountRepository;

use super::{column, is_unique_violation, storage_error, uuid_column};

const ACCOUNT_COLUMNS: &str = r#"
    id, email, password_hash, role, verified, enabled,
    first_name, last_name, phone, department, job_title,
    date_of_joining, timezone, last_login_at, created_at, updated_at
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let role: String = column(row, "role")?;

        Ok(Account {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role: role
                .parse::<Role>()
                .map_err(|message| DomainError::Internal { message })?,
            verified: column(row, "verified")?,
            enabled: column(row, "enabled")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            phone: column(row, "phone")?,
            department: column(row, "department")?,
            job_title: column(row, "job_title")?,
            date_of_joining: column::<Option<NaiveDate>>(row, "date_of_joining")?,
            timezone: column(row, "timezone")?,
            last_login_at: column::<Option<DateTime<Utc>>>(row, "last_login_at")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM accounts WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("look up account", e))?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find account by email", e))?;

        result.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE id = ? LIMIT 1", ACCOUNT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find account by id", e))?;

        result.as_ref().map(Self::row_to_account).transpose()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = format!(
            "INSERT INTO accounts ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            ACCOUNT_COLUMNS
        );

        sqlx::query(&query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.verified)
            .bind(account.enabled)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.phone)
            .bind(&account.department)
            .bind(&account.job_title)
            .bind(account.date_of_joining)
            .bind(&account.timezone)
            .bind(account.last_login_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                } else {
                    storage_error("create account", e)
                }
            })?;

        Ok(account)
    }

    async fn mark_verified_and_enabled(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE accounts
            SET verified = TRUE, enabled = TRUE, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(now)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("activate account", e))?;

        // MySQL reports zero affected rows when nothing changed
        if result.rows_affected() > 0 {
            Ok(true)
        } else {
            self.exists_by_id(id).await
        }
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE accounts
            SET password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(now)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("update password hash", e))?;

        if result.rows_affected() > 0 {
            Ok(true)
        } else {
            self.exists_by_id(id).await
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM accounts WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("check account email", e))?;

        Ok(row.is_some())
    }
}
