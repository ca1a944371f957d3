//! Session lifecycle: the password path.
//!
//! Errors on this path propagate with detail, because the user is present
//! and can correct their input. Compare [`crate::biometrics`], where failures
//! collapse to a boolean.

mod login;
mod logout;
mod register;

use aegis_core::{ApiError, Client, MissingFieldError};
use aegis_state::StoreError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credentials::StoredCredentials;

/// Subclient for the password-path session lifecycle.
#[derive(Clone)]
pub struct SessionClient {
    pub(crate) client: Client,
}

impl SessionClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}

impl SessionClient {
    /// Exchanges credentials for a session token and persists it together
    /// with the user identifier.
    pub async fn login(&self, request: &PasswordLoginRequest) -> Result<(), AuthError> {
        login::login(&self.client, request).await
    }

    /// Creates an account and persists the returned session. The password
    /// confirmation is forwarded for server-side validation, never checked
    /// here.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        register::register(&self.client, request).await
    }

    /// Ends the session. The server is notified best-effort; the local
    /// session token is deleted no matter what, so this never fails.
    pub async fn logout(&self) {
        logout::logout(&self.client).await;
    }

    /// Whether a session token is stored locally. No network call and no
    /// expiry check: an expired-but-present token still reports logged in,
    /// and the server stays the source of truth on the next authenticated
    /// request.
    pub async fn is_logged_in(&self) -> bool {
        match StoredCredentials::new(&self.client).session_token().await {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!("Unable to read the stored session token: {e}");
                false
            }
        }
    }
}

/// Login with email and password.
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordLoginRequest {
    /// Aegis account email address
    pub email: String,
    /// Aegis account password
    pub password: String,
}

/// Register a new account.
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    /// Aegis account email address
    pub email: String,
    /// Aegis account password
    pub password: String,
    /// Repeated password, validated server-side
    pub password_confirmation: String,
}

/// Error for password-path session operations.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server rejected the credentials or the request.
    #[error("Authentication rejected: {message}")]
    Rejected {
        /// The server's `message` field, or the HTTP status when absent.
        message: String,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
