//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

#[derive(Default)]
struct AccountTable {
    by_id: HashMap<Uuid, Account>,
    /// Unique email index
    id_by_email: HashMap<String, Uuid>,
}

/// Process-local account store for development and tests.
///
/// Check-and-insert happens under a single write guard, which gives the
/// same uniqueness guarantee as a database unique index.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    table: Arc<RwLock<AccountTable>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.table.read().await.by_id.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .id_by_email
            .get(email)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let table = self.table.read().await;
        Ok(table.by_id.get(&id).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut table = self.table.write().await;

        if table.id_by_email.contains_key(&account.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        table.id_by_email.insert(account.email.clone(), account.id);
        table.by_id.insert(account.id, account.clone());
        Ok(account)
    }

    async fn mark_verified_and_enabled(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        match table.by_id.get_mut(&id) {
            Some(account) => {
                account.mark_verified_and_enabled(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        match table.by_id.get_mut(&id) {
            Some(account) => {
                account.set_password_hash(password_hash.to_string(), now);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
