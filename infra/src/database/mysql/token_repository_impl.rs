//! MySQL implementation of the TokenRepository trait.
//!
//! Token values are stored as issued. Lookups go through the
//! `idx_tokens_access_token` index; consumption is a conditional delete so
//! only one caller can win for a given record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use hrm_core::domain::entities::account::Role;
use hrm_core::domain::entities::token::{TokenKind, TokenRecord};
use hrm_core::errors::DomainError;
use hrm_core::repositories::TokenRepository;

use super::{column, storage_error, uuid_column};

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to TokenRecord entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<TokenRecord, DomainError> {
        let role: String = column(row, "role")?;
        let kind: u8 = column(row, "kind")?;

        Ok(TokenRecord {
            id: uuid_column(row, "id")?,
            account_id: uuid_column(row, "account_id")?,
            role: role
                .parse::<Role>()
                .map_err(|message| DomainError::Internal { message })?,
            access_token: column(row, "access_token")?,
            refresh_token: column(row, "refresh_token")?,
            expires_at: column::<DateTime<Utc>>(row, "expires_at")?,
            kind: TokenKind::try_from(kind).map_err(|message| DomainError::Internal { message })?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError> {
        let query = r#"
            INSERT INTO tokens (
                id, account_id, role, access_token, refresh_token,
                expires_at, kind, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.account_id.to_string())
            .bind(record.role.as_str())
            .bind(&record.access_token)
            .bind(&record.refresh_token)
            .bind(record.expires_at)
            .bind(record.kind.code())
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("save token", e))?;

        Ok(record)
    }

    async fn find_active(
        &self,
        value: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Option<TokenRecord>, DomainError> {
        let query = r#"
            SELECT id, account_id, role, access_token, refresh_token,
                   expires_at, kind, created_at
            FROM tokens
            WHERE access_token = ? AND kind = ? AND expires_at > ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(value)
            .bind(kind.code())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find token", e))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tokens WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("consume token", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<TokenRecord>, DomainError> {
        let query = r#"
            SELECT id, account_id, role, access_token, refresh_token,
                   expires_at, kind, created_at
            FROM tokens
            WHERE account_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(account_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("find account tokens", e))?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn count_by_account_and_kind(
        &self,
        account_id: Uuid,
        kind: TokenKind,
    ) -> Result<usize, DomainError> {
        let query = "SELECT COUNT(*) AS total FROM tokens WHERE account_id = ? AND kind = ?";

        let row = sqlx::query(query)
            .bind(account_id.to_string())
            .bind(kind.code())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("count account tokens", e))?;

        let total: i64 = column(&row, "total")?;
        Ok(total.max(0) as usize)
    }
}
