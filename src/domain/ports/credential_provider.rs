//! Port for resolving the classification credential.

use crate::domain::entities::ApiKey;
use crate::error::AppError;

/// Supplies the API key for the classification endpoint.
///
/// Called once per lookup, before any network traffic.
///
/// # Implementations
///
/// - [`crate::infrastructure::credentials::EnvCredentials`] - process environment, read per call
/// - [`crate::infrastructure::credentials::StaticCredentials`] - fixed value
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if no usable credential is configured.
    fn api_key(&self) -> Result<ApiKey, AppError>;
}
