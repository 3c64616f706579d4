//! Page fetch and anchor extraction over HTTP.

use crate::domain::entities::LinkSet;
use crate::domain::ports::LinkExtractor;
use crate::error::AppError;
use crate::utils::url_normalizer::has_http_scheme;
use async_trait::async_trait;
use reqwest::{Client, header};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Collects the `href` of every anchor whose value starts with `http://` or
/// `https://`, in document order, duplicates included.
///
/// Relative links and other schemes are dropped; values are not resolved,
/// trimmed or normalized. The parser recovers from malformed markup the way a
/// browser does, so this never fails.
pub fn extract_links(html: &str) -> LinkSet {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| has_http_scheme(href))
        .map(String::from)
        .collect()
}

/// [`LinkExtractor`] backed by `reqwest` and `scraper`.
///
/// Every exit path drops the response, releasing its connection.
pub struct HttpLinkExtractor {
    client: Client,
}

impl HttpLinkExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// `true` when the declared content type can carry HTML.
///
/// A missing header is accepted; plenty of small sites omit it.
fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| ct.to_ascii_lowercase().contains("html"))
}

#[async_trait]
impl LinkExtractor for HttpLinkExtractor {
    async fn extract(&self, url: &str) -> Result<LinkSet, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(format!(
                "failed to fetch the webpage, status code: {}",
                status.as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if !is_html_content_type(content_type.as_deref()) {
            return Err(AppError::parse(format!(
                "expected an HTML document from {url}, got content type {}",
                content_type.unwrap_or_default()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch(format!("failed to read the webpage body: {e}")))?;

        let links = extract_links(&body);
        debug!(url, count = links.len(), "scraped links");

        Ok(links)
    }
}
