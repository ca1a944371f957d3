use aegis_core::UserId;
use serde::Deserialize;

/// Success body of the password login and register exchanges.
///
/// Fields are optional on the wire; the flows require the ones they need.
#[derive(Deserialize, Debug)]
pub(crate) struct SessionTokenApiResponse {
    pub token: Option<String>,
    pub user: Option<UserApiResponse>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct UserApiResponse {
    pub id: Option<UserId>,
}

/// Success body of the biometric login exchange.
#[derive(Deserialize, Debug)]
pub(crate) struct BiometricLoginApiResponse {
    pub token: Option<String>,
}

/// Error body shared by all auth endpoints.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorResponse {
    pub message: Option<String>,
}
