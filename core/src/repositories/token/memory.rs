//! In-memory implementation of TokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::{TokenKind, TokenRecord};
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Process-local token store for development and tests.
///
/// Expired records are never purged; they simply stop matching.
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, TokenRecord>>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, live or expired
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError> {
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_active(
        &self,
        value: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Option<TokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.access_token == value && r.kind == kind && r.is_active_at(now))
            .cloned())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<TokenRecord>, DomainError> {
        let records = self.records.read().await;
        let mut found: Vec<TokenRecord> = records
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }
}
