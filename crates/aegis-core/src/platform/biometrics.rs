use async_trait::async_trait;
use thiserror::Error;

/// An unexpected failure inside the platform biometric layer.
///
/// Expected negative outcomes (cancellation, lockout, missing hardware or no
/// enrolled biometrics) are not errors: the gate reports those uniformly as
/// `Ok(false)`.
#[derive(Debug, Error)]
#[error("Biometric platform failure: {0}")]
pub struct BiometricGateError(pub String);

/// Local-only biometric check implemented by the host platform.
///
/// The SDK never sees biometric data, only the verdict. A passing challenge
/// gates the biometric login exchange on the device; it is not by itself
/// proof the server accepts.
#[async_trait]
pub trait BiometricGate: Send + Sync {
    /// Whether the device can perform a biometric check right now (hardware
    /// present and at least one biometric enrolled).
    async fn is_available(&self) -> Result<bool, BiometricGateError>;

    /// Shows the interactive biometric prompt and waits until the user
    /// completes or dismisses it. `reason` is displayed in the prompt. The
    /// platform may keep the prompt open indefinitely or impose its own
    /// timeout; this layer does not add one.
    async fn challenge(&self, reason: &str) -> Result<bool, BiometricGateError>;
}
