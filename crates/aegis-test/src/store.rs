use std::collections::HashMap;

use aegis_state::{CredentialKey, CredentialStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory credential storage using HashMap with RwLock for thread-safe access.
///
/// Suitable for tests and other non-persistent uses; real installs keep their
/// credentials in the platform keystore.
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<CredentialKey, String>>,
    reject_set_of: RwLock<Option<CredentialKey>>,
}

impl MemoryCredentialStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            reject_set_of: RwLock::new(None),
        }
    }

    /// Makes every subsequent write of `key` fail, for exercising
    /// partial-write handling.
    pub async fn reject_writes_to(&self, key: CredentialKey) {
        *self.reject_set_of.write().await = Some(key);
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, StoreError> {
        let values = self.values.read().await;
        Ok(values.get(&key).cloned())
    }

    async fn set(&self, key: CredentialKey, value: String) -> Result<(), StoreError> {
        if *self.reject_set_of.read().await == Some(key) {
            return Err(StoreError::Internal(format!(
                "write of {key} rejected by test store"
            )));
        }

        let mut values = self.values.write().await;
        values.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: CredentialKey) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.remove(&key);
        Ok(())
    }
}
