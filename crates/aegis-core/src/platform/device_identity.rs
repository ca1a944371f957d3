use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::{DeviceType, UnsupportedPlatformError};

/// An error retrieving the platform device identifier.
///
/// These propagate instead of degrading to an empty string: an empty
/// identifier would silently corrupt the server-side device binding.
#[derive(Debug, Error)]
pub enum DeviceIdentityError {
    /// The platform did not return a device identifier.
    #[error("The platform did not return a device identifier")]
    Missing,

    /// The platform returned an identifier in an unexpected shape.
    #[error("The platform returned a malformed device identifier: {0}")]
    Malformed(String),
}

/// Narrow OS hook surfacing the raw hardware identifier, implemented by the
/// host application: `Settings.Secure.ANDROID_ID` on Android,
/// `UIDevice.identifierForVendor` on iOS.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HardwareIdentifierSource: Send + Sync {
    /// The raw identifier, if the OS exposes one.
    async fn hardware_identifier(&self) -> Option<String>;
}

/// Produces the stable, server-verifiable device identifier used by the
/// biometric binding. Must return the same value across app restarts on the
/// same install.
#[async_trait]
pub trait DeviceIdentityProvider: Send + Sync {
    /// Reads and validates the device identifier.
    async fn device_id(&self) -> Result<String, DeviceIdentityError>;
}

/// Device identity backed by the Android SSAID.
pub struct AndroidDeviceIdentity {
    source: Arc<dyn HardwareIdentifierSource>,
}

#[async_trait]
impl DeviceIdentityProvider for AndroidDeviceIdentity {
    async fn device_id(&self) -> Result<String, DeviceIdentityError> {
        let id = self
            .source
            .hardware_identifier()
            .await
            .ok_or(DeviceIdentityError::Missing)?;
        let id = id.trim();
        if id.is_empty() {
            return Err(DeviceIdentityError::Missing);
        }
        Ok(id.to_string())
    }
}

/// Device identity backed by `identifierForVendor` on iOS.
pub struct IosDeviceIdentity {
    source: Arc<dyn HardwareIdentifierSource>,
}

#[async_trait]
impl DeviceIdentityProvider for IosDeviceIdentity {
    async fn device_id(&self) -> Result<String, DeviceIdentityError> {
        let id = self
            .source
            .hardware_identifier()
            .await
            .ok_or(DeviceIdentityError::Missing)?;
        let parsed: Uuid = id
            .parse()
            .map_err(|_| DeviceIdentityError::Malformed(id.clone()))?;
        // identifierForVendor reports the nil UUID for a short window after a
        // device restart; treat it as not yet available.
        if parsed.is_nil() {
            return Err(DeviceIdentityError::Missing);
        }
        Ok(id)
    }
}

/// Selects the device identity provider for the host platform. Called once at
/// client startup.
pub fn device_identity_for(
    device_type: DeviceType,
    source: Arc<dyn HardwareIdentifierSource>,
) -> Result<Arc<dyn DeviceIdentityProvider>, UnsupportedPlatformError> {
    match device_type {
        DeviceType::Android => Ok(Arc::new(AndroidDeviceIdentity { source })),
        DeviceType::iOS => Ok(Arc::new(IosDeviceIdentity { source })),
        other => Err(UnsupportedPlatformError(other)),
    }
}
