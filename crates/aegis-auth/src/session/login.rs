use aegis_core::{require, ApiError, Client};

use super::{AuthError, PasswordLoginRequest};
use crate::{
    api::{
        post_json, rejection_message, request::PasswordLoginApiRequest,
        response::SessionTokenApiResponse,
    },
    credentials::StoredCredentials,
};

pub(crate) async fn login(client: &Client, input: &PasswordLoginRequest) -> Result<(), AuthError> {
    let config = client.internal.get_api_configuration();

    let payload = PasswordLoginApiRequest {
        email: input.email.clone(),
        password: input.password.clone(),
    };

    let response = post_json(&config, "auth/login", None, Some(&payload)).await?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected {
            message: rejection_message(response).await,
        });
    }

    let body: SessionTokenApiResponse = response.json().await.map_err(ApiError::from)?;

    persist_session_response(client, body).await
}

/// Stores the token and user id from a successful session exchange as one
/// unit.
pub(super) async fn persist_session_response(
    client: &Client,
    body: SessionTokenApiResponse,
) -> Result<(), AuthError> {
    let token = require!(body.token);
    let user = require!(body.user);
    let user_id = require!(user.id);

    StoredCredentials::new(client)
        .persist_session(token, user_id)
        .await?;

    Ok(())
}
