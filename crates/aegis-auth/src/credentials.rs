//! Typed access to the persisted credentials.
//!
//! The credential store exclusively owns the persisted strings: flows read
//! them once per call and never cache them in memory beyond that call.

use std::sync::Arc;

use aegis_core::{Client, UserId};
use aegis_state::{CredentialKey, CredentialStore, StoreError};

pub(crate) struct StoredCredentials<'a> {
    client: &'a Client,
}

impl<'a> StoredCredentials<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn store(&self) -> Arc<dyn CredentialStore> {
        self.client.internal.credential_store()
    }

    pub(crate) async fn session_token(&self) -> Result<Option<String>, StoreError> {
        self.store().get(CredentialKey::SessionToken).await
    }

    pub(crate) async fn user_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get(CredentialKey::UserId).await
    }

    pub(crate) async fn device_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get(CredentialKey::DeviceId).await
    }

    /// Persists a fresh session as one unit. If the second write fails the
    /// first is rolled back, so a half-written session never looks
    /// authenticated.
    pub(crate) async fn persist_session(
        &self,
        token: String,
        user_id: UserId,
    ) -> Result<(), StoreError> {
        let _guard = self.client.internal.credential_write_lock().lock().await;
        let store = self.store();

        store.set(CredentialKey::SessionToken, token).await?;
        if let Err(e) = store.set(CredentialKey::UserId, user_id.into_string()).await {
            if let Err(rollback) = store.remove(CredentialKey::SessionToken).await {
                tracing::error!(
                    "Failed to roll back the session token after a partial write: {rollback}"
                );
            }
            return Err(e);
        }

        Ok(())
    }

    /// Overwrites only the session token, leaving the identifiers untouched.
    pub(crate) async fn replace_session_token(&self, token: String) -> Result<(), StoreError> {
        let _guard = self.client.internal.credential_write_lock().lock().await;
        self.store().set(CredentialKey::SessionToken, token).await
    }

    pub(crate) async fn persist_device_id(&self, device_id: String) -> Result<(), StoreError> {
        let _guard = self.client.internal.credential_write_lock().lock().await;
        self.store().set(CredentialKey::DeviceId, device_id).await
    }

    pub(crate) async fn clear_session_token(&self) -> Result<(), StoreError> {
        let _guard = self.client.internal.credential_write_lock().lock().await;
        self.store().remove(CredentialKey::SessionToken).await
    }
}
