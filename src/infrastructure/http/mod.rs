//! Outbound HTTP: the shared client and the page link extractor.

pub mod client;
pub mod http_link_extractor;

pub use client::build_http_client;
pub use http_link_extractor::{HttpLinkExtractor, extract_links};
