use aegis_core::{require, ApiError, Client, UserId};

use super::BiometricAuthError;
use crate::{
    api::{post_json, request::BiometricLoginApiRequest, response::BiometricLoginApiResponse},
    credentials::StoredCredentials,
};

/// Shown in the platform's biometric prompt.
const CHALLENGE_REASON: &str = "Confirm your identity to sign in";

/// Local gate first, then the server exchange.
pub(super) async fn authenticate_user(client: &Client) -> Result<(), BiometricAuthError> {
    let gate = client.internal.biometrics();

    if !gate.is_available().await? {
        return Err(BiometricAuthError::LocalUnavailable);
    }

    if !gate.challenge(CHALLENGE_REASON).await? {
        return Err(BiometricAuthError::ChallengeFailed);
    }

    biometric_login(client).await
}

/// Exchanges the stored user and device identifiers for a fresh session
/// token. The identifier pair is the credential: no bearer token, no
/// password. Stored state is only touched on success, and only the session
/// token.
pub(super) async fn biometric_login(client: &Client) -> Result<(), BiometricAuthError> {
    let credentials = StoredCredentials::new(client);

    let user_id = credentials
        .user_id()
        .await?
        .ok_or(BiometricAuthError::NotEnrolled)?;
    let device_id = credentials
        .device_id()
        .await?
        .ok_or(BiometricAuthError::NotEnrolled)?;

    let config = client.internal.get_api_configuration();
    let payload = BiometricLoginApiRequest {
        user_id: UserId::from(user_id),
        device_id,
    };
    let response = post_json(&config, "auth/biometric-login", None, Some(&payload)).await?;

    if !response.status().is_success() {
        return Err(BiometricAuthError::RemoteRejected {
            status: response.status(),
        });
    }

    let body: BiometricLoginApiResponse = response.json().await.map_err(ApiError::from)?;
    let token = require!(body.token);

    credentials.replace_session_token(token).await?;

    Ok(())
}
