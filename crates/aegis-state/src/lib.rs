#![doc = include_str!("../README.md")]

/// This module provides the durable credential storage contract implemented by
/// host applications.
pub mod store;

mod keys;

pub use keys::CredentialKey;
pub use store::{CredentialStore, StoreError};
