//! Platform collaborators the host application wires into the client.
//!
//! The SDK orchestrates these but never implements them: secure storage,
//! biometric verdicts and hardware identity all stay on the platform side of
//! this seam.

mod biometrics;
mod device_identity;

use std::sync::Arc;

use aegis_state::CredentialStore;

pub use biometrics::{BiometricGate, BiometricGateError};
pub use device_identity::{
    device_identity_for, AndroidDeviceIdentity, DeviceIdentityError, DeviceIdentityProvider,
    HardwareIdentifierSource, IosDeviceIdentity,
};
use crate::{DeviceType, UnsupportedPlatformError};

/// The device-local collaborators a [`crate::Client`] is constructed with.
pub struct ClientPlatform {
    /// Durable, app-private credential storage.
    pub credential_store: Arc<dyn CredentialStore>,
    /// Stable device identifier lookup, selected per platform.
    pub device_identity: Arc<dyn DeviceIdentityProvider>,
    /// Local biometric capability and challenge prompt.
    pub biometrics: Arc<dyn BiometricGate>,
}

impl ClientPlatform {
    /// Wires up the platform collaborators for `device_type`, selecting the
    /// matching device identity provider. Fails fast on platforms that cannot
    /// take part in device-bound authentication.
    pub fn for_device_type(
        device_type: DeviceType,
        credential_store: Arc<dyn CredentialStore>,
        identifier_source: Arc<dyn HardwareIdentifierSource>,
        biometrics: Arc<dyn BiometricGate>,
    ) -> Result<Self, UnsupportedPlatformError> {
        Ok(Self {
            credential_store,
            device_identity: device_identity_for(device_type, identifier_source)?,
            biometrics,
        })
    }
}

impl std::fmt::Debug for ClientPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientPlatform").finish_non_exhaustive()
    }
}
