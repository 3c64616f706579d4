//! Social link lookup service.

use std::sync::Arc;

use crate::domain::entities::{LinkLookup, SocialLinks};
use crate::domain::ports::{CredentialProvider, LinkClassifier, LinkExtractor};
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_target;
use tracing::{debug, info};

/// Runs the extraction-and-classification pipeline for one domain.
///
/// The two outbound calls are strictly sequential: classification needs the
/// link set the extractor produced.
pub struct SocialLinkService {
    extractor: Arc<dyn LinkExtractor>,
    classifier: Arc<dyn LinkClassifier>,
    credentials: Arc<dyn CredentialProvider>,
}

impl SocialLinkService {
    /// Creates a new lookup service.
    pub fn new(
        extractor: Arc<dyn LinkExtractor>,
        classifier: Arc<dyn LinkClassifier>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            extractor,
            classifier,
            credentials,
        }
    }

    /// Finds the social-media links on the page behind `domain`.
    ///
    /// # Flow
    ///
    /// 1. Normalize the input (`example.com` becomes `http://example.com`)
    /// 2. Resolve the API key; nothing touches the network without one
    /// 3. Scrape the page's absolute links
    /// 4. Ask the classifier which of them are social-media links
    ///
    /// A page without absolute links short-circuits to an empty result
    /// without calling the classifier.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `domain` is blank or not a URL
    /// - [`AppError::Config`] if no credential is configured
    /// - any error of [`LinkExtractor::extract`] or [`LinkClassifier::classify`]
    pub async fn find_social_links(&self, domain: &str) -> Result<LinkLookup, AppError> {
        let target =
            normalize_target(domain).map_err(|e| AppError::validation(e.to_string()))?;

        let api_key = self.credentials.api_key()?;

        let links = self.extractor.extract(&target).await?;
        info!(url = %target, count = links.len(), "scraped links");
        debug!(links = ?links.as_slice(), "scraped link set");

        let social = if links.is_empty() {
            info!(url = %target, "page has no absolute links, skipping classification");
            SocialLinks::skipped()
        } else {
            self.classifier.classify(&links, &api_key).await?
        };

        info!(
            url = %target,
            path = %social.path,
            count = social.links.len(),
            "classified links"
        );

        Ok(LinkLookup {
            target,
            scraped: links.len(),
            social,
        })
    }

    /// Returns `true` if a usable API key is configured right now.
    pub fn credentials_configured(&self) -> bool {
        self.credentials.api_key().is_ok()
    }
}
