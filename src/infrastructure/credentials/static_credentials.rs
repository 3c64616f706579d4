//! Fixed credential, for the CLI `--api-key` flag and tests.

use crate::domain::entities::ApiKey;
use crate::domain::ports::CredentialProvider;
use crate::error::AppError;

/// Returns the same raw value on every call, validated each time.
#[derive(Clone)]
pub struct StaticCredentials {
    raw: String,
}

impl StaticCredentials {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Result<ApiKey, AppError> {
        ApiKey::parse(&self.raw)
    }
}
