use async_trait::async_trait;

use crate::keys::CredentialKey;

/// An error resulting from operations on the credential store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// An internal unspecified error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The platform refused access to the secure store.
    #[error("Secure store access denied: {0}")]
    AccessDenied(String),
}

/// Durable key/value storage for the SDK's credentials, implemented by the
/// host application on top of the platform keystore.
///
/// Implementations must keep values across process restarts and must not
/// expose them to other applications on the device. Encryption at rest is the
/// implementer's concern, not the SDK's.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, StoreError>;
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: CredentialKey, value: String) -> Result<(), StoreError>;
    /// Removes the value stored under `key`, if any.
    async fn remove(&self, key: CredentialKey) -> Result<(), StoreError>;
}
