//! Port for asking a language model which links are social-media profiles.

use crate::domain::entities::{ApiKey, LinkSet, SocialLinks};
use crate::error::AppError;
use async_trait::async_trait;

/// Classifies a link set, keeping only social-media links.
///
/// The credential is passed per call rather than held by the implementation,
/// so a key rotated in the environment takes effect on the next request.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::OpenAiClassifier`] - chat-completion API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkClassifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] if the endpoint is unreachable or answers
    /// with a non-success status (status code and body in the message).
    ///
    /// Returns [`AppError::Decode`] if the reply envelope is malformed or has
    /// no choices.
    async fn classify(&self, links: &LinkSet, api_key: &ApiKey) -> Result<SocialLinks, AppError>;
}
