//! Classification API credential.

use crate::error::AppError;
use std::fmt;

/// Values shipped in sample configuration that must never reach the API.
const PLACEHOLDER_KEYS: &[&str] = &["sk-your-key-here", "your-openai-api-key", "changeme"];

/// A validated bearer credential for the classification endpoint.
///
/// The raw value is only reachable through [`ApiKey::expose`]; `Debug` output
/// is masked so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates a raw credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the value is blank or a known placeholder.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let value = raw.trim();

        if value.is_empty() || PLACEHOLDER_KEYS.contains(&value) {
            return Err(AppError::config("OpenAI API key not set or invalid"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
