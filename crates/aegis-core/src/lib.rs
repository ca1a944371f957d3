#![doc = include_str!("../README.md")]

pub mod client;
mod error;
pub mod platform;

pub use error::{ApiError, MissingFieldError, NotAuthenticatedError, UnsupportedPlatformError};

mod ids;
pub use client::{Client, ClientSettings, DeviceType};
pub use ids::UserId;
