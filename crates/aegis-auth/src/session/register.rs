use aegis_core::{ApiError, Client};

use super::{login::persist_session_response, AuthError, RegisterRequest};
use crate::api::{
    post_json, rejection_message, request::RegisterApiRequest, response::SessionTokenApiResponse,
};

pub(crate) async fn register(client: &Client, input: &RegisterRequest) -> Result<(), AuthError> {
    let config = client.internal.get_api_configuration();

    let payload = RegisterApiRequest {
        email: input.email.clone(),
        password: input.password.clone(),
        password_confirmation: input.password_confirmation.clone(),
    };

    let response = post_json(&config, "auth/register", None, Some(&payload)).await?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected {
            message: rejection_message(response).await,
        });
    }

    let body: SessionTokenApiResponse = response.json().await.map_err(ApiError::from)?;

    persist_session_response(client, body).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aegis_core::{platform::ClientPlatform, Client, ClientSettings, DeviceType};
    use aegis_state::{CredentialKey, CredentialStore};
    use aegis_test::{FakeBiometricGate, FixedDeviceIdentity, MemoryCredentialStore};
    use wiremock::{
        matchers::{body_json, method, path},
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

    #[tokio::test]
    async fn register_forwards_the_confirmation_and_persists_the_session() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(serde_json::json!({
                "email": "new@b.com",
                "password": "pw",
                "password_confirmation": "pw-typo"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"token": "T1", "user": {"id": "42"}}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        // The mismatching confirmation still goes to the server untouched;
        // rejecting it is the server's call.
        register(
            &client,
            &RegisterRequest {
                email: "new@b.com".into(),
                password: "pw".into(),
                password_confirmation: "pw-typo".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            store.get(CredentialKey::SessionToken).await.unwrap(),
            Some("T1".to_string())
        );
        assert_eq!(
            store.get(CredentialKey::UserId).await.unwrap(),
            Some("42".to_string())
        );
    }

    #[tokio::test]
    async fn register_rejection_propagates_the_message() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::new());

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(422).set_body_json(
                serde_json::json!({"message": "Passwords do not match"}),
            ))
            .mount(&server)
            .await;

        let client = test_client(&server, store.clone());
        let result = register(
            &client,
            &RegisterRequest {
                email: "new@b.com".into(),
                password: "pw".into(),
                password_confirmation: "wp".into(),
            },
        )
        .await;

        match result {
            Err(AuthError::Rejected { message }) => {
                assert_eq!(message, "Passwords do not match")
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
        assert_eq!(store.get(CredentialKey::SessionToken).await.unwrap(), None);
    }
}
