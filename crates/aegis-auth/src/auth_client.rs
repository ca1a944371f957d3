use aegis_core::Client;

use crate::{biometrics::BiometricClient, session::SessionClient};

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client for the password-path session lifecycle.
    pub fn session(&self) -> SessionClient {
        SessionClient::new(self.client.clone())
    }

    /// Client for biometric enrollment and login.
    pub fn biometrics(&self) -> BiometricClient {
        BiometricClient::new(self.client.clone())
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
