use std::sync::atomic::{AtomicUsize, Ordering};

use aegis_core::platform::{
    BiometricGate, BiometricGateError, DeviceIdentityError, DeviceIdentityProvider,
};
use async_trait::async_trait;

/// Scriptable biometric gate.
pub struct FakeBiometricGate {
    available: bool,
    challenge_passes: bool,
    challenges_shown: AtomicUsize,
}

impl FakeBiometricGate {
    /// A gate that is available and passes every challenge.
    pub fn passing() -> Self {
        Self::new(true, true)
    }

    /// A gate with the given availability and challenge verdicts.
    pub fn new(available: bool, challenge_passes: bool) -> Self {
        Self {
            available,
            challenge_passes,
            challenges_shown: AtomicUsize::new(0),
        }
    }

    /// How many times the interactive challenge was shown.
    pub fn challenges_shown(&self) -> usize {
        self.challenges_shown.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricGate for FakeBiometricGate {
    async fn is_available(&self) -> Result<bool, BiometricGateError> {
        Ok(self.available)
    }

    async fn challenge(&self, _reason: &str) -> Result<bool, BiometricGateError> {
        self.challenges_shown.fetch_add(1, Ordering::SeqCst);
        Ok(self.challenge_passes)
    }
}

/// Device identity that reports the same identifier on every read.
pub struct FixedDeviceIdentity {
    device_id: String,
}

impl FixedDeviceIdentity {
    /// A provider reporting `device_id` on every read.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

#[async_trait]
impl DeviceIdentityProvider for FixedDeviceIdentity {
    async fn device_id(&self) -> Result<String, DeviceIdentityError> {
        Ok(self.device_id.clone())
    }
}

/// Device identity that fails every read, as on a platform that withholds its
/// identifier.
pub struct UnavailableDeviceIdentity;

#[async_trait]
impl DeviceIdentityProvider for UnavailableDeviceIdentity {
    async fn device_id(&self) -> Result<String, DeviceIdentityError> {
        Err(DeviceIdentityError::Missing)
    }
}
