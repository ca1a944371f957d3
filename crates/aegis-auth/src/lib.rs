#![doc = include_str!("../README.md")]

mod auth_client;
mod credentials;

pub(crate) mod api; // keep internal to crate

pub mod biometrics;
pub mod session;

pub use auth_client::{AuthClient, AuthClientExt};
