use aegis_core::UserId;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub(crate) struct PasswordLoginApiRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct RegisterApiRequest {
    pub email: String,
    pub password: String,
    /// Forwarded for server-side validation; never checked client-side.
    pub password_confirmation: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct BiometricEnrollApiRequest {
    pub device_id: String,
}

/// The identifier pair is the whole credential for this exchange; there is no
/// bearer token and no password.
#[derive(Serialize, Debug)]
pub(crate) struct BiometricLoginApiRequest {
    pub user_id: UserId,
    pub device_id: String,
}
