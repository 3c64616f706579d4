//! Credential lookup from the process environment.

use crate::domain::entities::ApiKey;
use crate::domain::ports::CredentialProvider;
use crate::error::AppError;
use std::env;

/// Environment variable holding the classification API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Reads the API key from the environment on every call.
///
/// Nothing is cached: setting or rotating the variable takes effect on the
/// next lookup without a restart.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Result<ApiKey, AppError> {
        let raw = env::var(&self.var).unwrap_or_default();
        ApiKey::parse(&raw)
    }
}
