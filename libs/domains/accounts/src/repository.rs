use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[cfg(test)]
use mockall::automock;

use crate::error::AccountResult;
use crate::models::{Account, AccountId};

/// Repository trait for Account persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert the account, assigning an id when it has none; otherwise
    /// overwrite the record stored under its id
    async fn save(&self, account: Account) -> AccountResult<Account>;

    /// Get an account by ID
    async fn find_by_id(&self, id: AccountId) -> AccountResult<Option<Account>>;

    /// List every stored account
    async fn find_all(&self) -> AccountResult<Vec<Account>>;

    /// Remove an account by ID. Removing an unknown id is a no-op.
    async fn delete_by_id(&self, id: AccountId) -> AccountResult<()>;
}

#[derive(Debug)]
struct Store {
    accounts: BTreeMap<AccountId, Account>,
    next_id: AccountId,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of AccountRepository (for development/testing).
///
/// Ids start at 1 and `find_all` returns accounts in ascending id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, mut account: Account) -> AccountResult<Account> {
        let mut store = self.store.write().await;

        let id = match account.id {
            Some(id) => id,
            None => store.next_id,
        };
        store.next_id = store.next_id.max(id.saturating_add(1));

        account.id = Some(id);
        store.accounts.insert(id, account.clone());

        tracing::info!(account_id = id, "Saved account");
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> AccountResult<Option<Account>> {
        let store = self.store.read().await;
        Ok(store.accounts.get(&id).cloned())
    }

    async fn find_all(&self) -> AccountResult<Vec<Account>> {
        let store = self.store.read().await;
        Ok(store.accounts.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: AccountId) -> AccountResult<()> {
        let mut store = self.store.write().await;

        if store.accounts.remove(&id).is_some() {
            tracing::info!(account_id = id, "Deleted account");
        }

        Ok(())
    }
}
