use aegis_core::{Client, NotAuthenticatedError};

use super::BiometricAuthError;
use crate::{
    api::{post_json, request::BiometricEnrollApiRequest},
    credentials::StoredCredentials,
};

/// Submits the device identifier under the current session, creating the
/// server-side binding between the account and this device.
pub(super) async fn register_biometric_device(client: &Client) -> Result<(), BiometricAuthError> {
    let credentials = StoredCredentials::new(client);

    let token = credentials
        .session_token()
        .await?
        .ok_or(NotAuthenticatedError)?;

    let device_id = client.internal.device_identity().device_id().await?;

    let config = client.internal.get_api_configuration();
    let payload = BiometricEnrollApiRequest {
        device_id: device_id.clone(),
    };
    let response = post_json(
        &config,
        "auth/register-biometric",
        Some(token.as_str()),
        Some(&payload),
    )
    .await?;

    if !response.status().is_success() {
        return Err(BiometricAuthError::RemoteRejected {
            status: response.status(),
        });
    }

    // The local copy is what biometric login presents later; only a binding
    // the server accepted is worth remembering.
    credentials.persist_device_id(device_id).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aegis_core::{
        platform::{ClientPlatform, DeviceIdentityProvider},
        Client, ClientSettings, DeviceType,
    };
    use aegis_state::{CredentialKey, CredentialStore};
    use aegis_test::{
        FakeBiometricGate, FixedDeviceIdentity, MemoryCredentialStore, UnavailableDeviceIdentity,
    };
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::AuthClientExt;

    fn test_client_with_identity(
        server: &MockServer,
        store: Arc<MemoryCredentialStore>,
        device_identity: Arc<dyn DeviceIdentityProvider>,
    ) -> Client {
        let settings = ClientSettings {
            api_url: server.uri(),
            user_agent: "Aegis Rust-SDK [TEST]".into(),
            device_type: DeviceType::SDK,
            client_version: None,
        };

        Client::new(
            Some(settings),
            ClientPlatform {
                credential_store: store,
                device_identity,
                biometrics: Arc::new(FakeBiometricGate::passing()),
            },
        )
    }

    fn test_client(server: &MockServer, store: Arc<MemoryCredentialStore>) -> Client {
        test_client_with_identity(server, store, Arc::new(FixedDeviceIdentity::new("D1")))
    }

    #[tokio::test]
    async fn enrollment_submits_the_device_id_under_the_session() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .set(CredentialKey::SessionToken, "T1".to_string())
            .await
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/auth/register-biometric"))
            .and(header("authorization", "Bearer T1"))
            .and(body_json(serde_json::json!({"device_id": "D1"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        assert!(client.auth().biometrics().register_biometric_user().await);

        assert_eq!(
            store.get(CredentialKey::DeviceId).await.unwrap(),
            Some("D1".to_string())
        );
    }

    #[tokio::test]
    async fn enrollment_requires_a_stored_session_token() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());

        Mock::given(method("POST"))
            .and(path("/auth/register-biometric"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());

        let result = register_biometric_device(&client).await;
        assert!(matches!(
            result,
            Err(BiometricAuthError::NotAuthenticated(_))
        ));

        // The public surface swallows the detail into a plain false.
        assert!(!client.auth().biometrics().register_biometric_user().await);
    }

    #[tokio::test]
    async fn enrollment_rejection_changes_no_state() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .set(CredentialKey::SessionToken, "T1".to_string())
            .await
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/auth/register-biometric"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        assert!(!client.auth().biometrics().register_biometric_user().await);

        assert_eq!(store.get(CredentialKey::DeviceId).await.unwrap(), None);
        assert_eq!(
            store.get(CredentialKey::SessionToken).await.unwrap(),
            Some("T1".to_string())
        );
    }

    #[tokio::test]
    async fn enrollment_fails_when_the_platform_withholds_its_identifier() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .set(CredentialKey::SessionToken, "T1".to_string())
            .await
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/auth/register-biometric"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client =
            test_client_with_identity(&server, store.clone(), Arc::new(UnavailableDeviceIdentity));

        let result = register_biometric_device(&client).await;
        assert!(matches!(
            result,
            Err(BiometricAuthError::DeviceIdentity(_))
        ));
        assert_eq!(store.get(CredentialKey::DeviceId).await.unwrap(), None);
    }
}
