use std::sync::Arc;

use aegis_state::CredentialStore;

use crate::platform::{BiometricGate, ClientPlatform, DeviceIdentityProvider};

/// Configuration for the Aegis API endpoints the client talks to.
pub struct ApiConfiguration {
    /// Base URL for API endpoints, without a trailing slash.
    pub base_path: String,
    /// The user agent sent with every request.
    pub user_agent: String,
    /// The HTTP client requests are issued through.
    pub client: reqwest_middleware::ClientWithMiddleware,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

#[allow(missing_docs)]
pub struct InternalClient {
    pub(crate) api_configuration: Arc<ApiConfiguration>,
    pub(crate) platform: ClientPlatform,

    // Serializes credential writes so overlapping calls (e.g. a rapid
    // double-press firing two logins at once) cannot interleave partial state.
    pub(crate) credential_write_lock: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("api_configuration", &self.api_configuration)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    /// The API endpoint configuration.
    pub fn get_api_configuration(&self) -> Arc<ApiConfiguration> {
        Arc::clone(&self.api_configuration)
    }

    /// The host-provided secure credential store.
    pub fn credential_store(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.platform.credential_store)
    }

    /// The host-provided local biometric gate.
    pub fn biometrics(&self) -> Arc<dyn BiometricGate> {
        Arc::clone(&self.platform.biometrics)
    }

    /// The device identity provider selected at startup.
    pub fn device_identity(&self) -> Arc<dyn DeviceIdentityProvider> {
        Arc::clone(&self.platform.device_identity)
    }

    /// Lock guarding credential writes. Flows hold this for the duration of a
    /// persist-or-roll-back sequence, never across a network call.
    pub fn credential_write_lock(&self) -> &tokio::sync::Mutex<()> {
        &self.credential_write_lock
    }
}
