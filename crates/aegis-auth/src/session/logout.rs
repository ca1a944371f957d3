use aegis_core::{ApiError, Client};

use crate::{api::post_json, credentials::StoredCredentials};

/// Ends the session. The server notification is best-effort; deleting the
/// local session token is not.
pub(crate) async fn logout(client: &Client) {
    let credentials = StoredCredentials::new(client);

    let token = match credentials.session_token().await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Unable to read the session token for logout: {e}");
            None
        }
    };

    if let Some(token) = token {
        if let Err(e) = notify_server(client, &token).await {
            tracing::warn!("Logout notification failed: {e}");
        }
    }

    // Local deletion happens regardless of how the notification went.
    if let Err(e) = credentials.clear_session_token().await {
        tracing::error!("Failed to delete the stored session token: {e}");
    }
}

async fn notify_server(client: &Client, token: &str) -> Result<(), ApiError> {
    let config = client.internal.get_api_configuration();
    let response = post_json(&config, "auth/logout", Some(token), None::<&()>).await?;

    if !response.status().is_success() {
        return Err(ApiError::ResponseContent {
            status: response.status(),
            message: "logout notification rejected".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aegis_core::{platform::ClientPlatform, Client, ClientSettings, DeviceType};
    use aegis_state::{CredentialKey, CredentialStore};
    use aegis_test::{FakeBiometricGate, FixedDeviceIdentity, MemoryCredentialStore};
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn test_client(server: &MockServer, store: Arc<MemoryCredentialStore>) -> Client {
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
                device_identity: Arc::new(FixedDeviceIdentity::new("D1")),
                biometrics: Arc::new(FakeBiometricGate::passing()),
            },
        )
    }

    async fn seed_bound_session(store: &MemoryCredentialStore) {
        store
            .set(CredentialKey::SessionToken, "T1".to_string())
            .await
            .unwrap();
        store
            .set(CredentialKey::UserId, "7".to_string())
            .await
            .unwrap();
        store
            .set(CredentialKey::DeviceId, "D1".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn logout_notifies_the_server_and_clears_the_token() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        seed_bound_session(&store).await;

        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        logout(&client).await;

        assert_eq!(store.get(CredentialKey::SessionToken).await.unwrap(), None);
        // The binding survives logout so the next sign-in can go through the
        // biometric path.
        assert_eq!(
            store.get(CredentialKey::UserId).await.unwrap(),
            Some("7".to_string())
        );
        assert_eq!(
            store.get(CredentialKey::DeviceId).await.unwrap(),
            Some("D1".to_string())
        );
    }

    #[tokio::test]
    async fn logout_clears_the_token_even_when_the_server_fails() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());
        seed_bound_session(&store).await;

        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        logout(&client).await;

        assert_eq!(store.get(CredentialKey::SessionToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn logout_without_a_token_skips_the_notification() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());

        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        logout(&client).await;

        assert_eq!(store.get(CredentialKey::SessionToken).await.unwrap(), None);
    }
}
