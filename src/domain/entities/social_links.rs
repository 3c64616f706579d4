//! Classification result entities.

use serde::Serialize;
use std::fmt;

/// Which reply-parsing stage produced a [`SocialLinks`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPath {
    /// The reply carried a `{"social_media_links": [...]}` object.
    Structured,
    /// The reply was not structured; URL-prefixed lines were collected instead.
    LineScan,
    /// The page had no absolute links, so the model was not asked.
    Skipped,
}

impl fmt::Display for ExtractionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionPath::Structured => "structured",
            ExtractionPath::LineScan => "line_scan",
            ExtractionPath::Skipped => "skipped",
        };
        f.write_str(name)
    }
}

/// Social-media links selected by the classifier, in reply order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub links: Vec<String>,
    pub path: ExtractionPath,
}

impl SocialLinks {
    pub fn structured(links: Vec<String>) -> Self {
        Self {
            links,
            path: ExtractionPath::Structured,
        }
    }

    pub fn line_scan(links: Vec<String>) -> Self {
        Self {
            links,
            path: ExtractionPath::LineScan,
        }
    }

    pub fn skipped() -> Self {
        Self {
            links: Vec::new(),
            path: ExtractionPath::Skipped,
        }
    }
}

/// Outcome of one lookup: the fetched target plus what was found on it.
#[derive(Debug, Clone, Serialize)]
pub struct LinkLookup {
    /// Normalized URL that was fetched.
    pub target: String,
    /// Number of absolute links scraped from the page.
    pub scraped: usize,
    pub social: SocialLinks,
}
