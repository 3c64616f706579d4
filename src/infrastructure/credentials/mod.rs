//! [`crate::domain::ports::CredentialProvider`] implementations.

pub mod env_credentials;
pub mod static_credentials;

pub use env_credentials::{API_KEY_VAR, EnvCredentials};
pub use static_credentials::StaticCredentials;
