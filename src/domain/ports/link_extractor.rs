//! Port for fetching a page and collecting its absolute links.

use crate::domain::entities::LinkSet;
use crate::error::AppError;
use async_trait::async_trait;

/// Fetches a page and returns the absolute links found in its anchors.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkExtractor`] - reqwest + scraper
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkExtractor: Send + Sync {
    /// Fetches `url` and collects the `href` of every anchor whose value
    /// starts with `http://` or `https://`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] if the page is unreachable or answers with
    /// a non-success status.
    ///
    /// Returns [`AppError::Parse`] if the body is not an HTML document.
    async fn extract(&self, url: &str) -> Result<LinkSet, AppError>;
}
