#![doc = include_str!("../README.md")]

mod api;
mod platform;
mod store;

pub use api::start_api_mock;
pub use platform::{FakeBiometricGate, FixedDeviceIdentity, UnavailableDeviceIdentity};
pub use store::MemoryCredentialStore;
