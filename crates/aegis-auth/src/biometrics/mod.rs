//! Device-bound biometric re-authentication.
//!
//! Everything on this path collapses to a boolean at the public surface: the
//! biometric login is an optional convenience with a mandatory password-path
//! fallback, and it may run with no user attention span for diagnostics. The
//! internal flows keep an explicit error type so the failure modes stay
//! testable; the boolean projection logs the detail instead of surfacing it.

mod enroll;
mod login;

use aegis_core::{
    platform::{BiometricGateError, DeviceIdentityError},
    ApiError, Client, MissingFieldError, NotAuthenticatedError,
};
use aegis_state::StoreError;
use reqwest::StatusCode;
use thiserror::Error;

/// Subclient for biometric enrollment and login.
#[derive(Clone)]
pub struct BiometricClient {
    pub(crate) client: Client,
}

impl BiometricClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}

impl BiometricClient {
    /// Registers this device for biometric login under the current session.
    /// Requires a stored session token; returns false on any failure.
    pub async fn register_biometric_user(&self) -> bool {
        project(
            enroll::register_biometric_device(&self.client).await,
            "biometric enrollment",
        )
    }

    /// Whether the device can offer biometric login right now.
    pub async fn check_biometric_availability(&self) -> bool {
        match self.client.internal.biometrics().is_available().await {
            Ok(available) => available,
            Err(e) => {
                tracing::warn!("Biometric availability check failed: {e}");
                false
            }
        }
    }

    /// Runs the full biometric login: availability check, interactive
    /// challenge, then the server exchange. Returns false on any failure,
    /// including the user dismissing the prompt.
    pub async fn authenticate_user(&self) -> bool {
        project(
            login::authenticate_user(&self.client).await,
            "biometric login",
        )
    }
}

/// Explicit outcome of the biometric flows. The public API projects this to a
/// boolean and logs the variant.
#[derive(Debug, Error)]
pub(crate) enum BiometricAuthError {
    #[error("Biometrics are not available on this device")]
    LocalUnavailable,
    #[error("The user did not pass the biometric challenge")]
    ChallengeFailed,
    #[error("No biometric binding is stored on this device")]
    NotEnrolled,
    #[error("The server rejected the biometric exchange: [{status}]")]
    RemoteRejected { status: StatusCode },
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Gate(#[from] BiometricGateError),
    #[error(transparent)]
    DeviceIdentity(#[from] DeviceIdentityError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

fn project(outcome: Result<(), BiometricAuthError>, operation: &str) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("{operation} did not complete: {e}");
            false
        }
    }
}
