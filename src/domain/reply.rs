//! Extraction of social links from a free-form model reply.
//!
//! The model is asked for `{"social_media_links": [...]}` but nothing enforces
//! that contract, so parsing runs in two stages:
//!
//! 1. [`parse_structured`] - the reply (or an object embedded in surrounding
//!    prose) deserializes into the requested object;
//! 2. [`scan_lines`] - otherwise every trimmed line starting with `http://` or
//!    `https://` is kept.
//!
//! [`parse_reply`] chains both and records which one produced the result.

use crate::domain::entities::SocialLinks;
use crate::error::AppError;
use crate::utils::url_normalizer::has_http_scheme;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Start of a `{"social_media_links": ...}` object anywhere in the reply.
static OBJECT_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{\s*"social_media_links"\s*:"#).unwrap());

#[derive(Debug, Deserialize)]
struct StructuredReply {
    social_media_links: Vec<String>,
}

/// Deserializes the first JSON value at the start of `candidate`, ignoring
/// whatever text follows it.
fn leading_object(candidate: &str) -> Option<StructuredReply> {
    serde_json::Deserializer::from_str(candidate)
        .into_iter::<StructuredReply>()
        .next()
        .and_then(Result::ok)
}

/// Parses the reply as `{"social_media_links": [string...]}`.
///
/// Markdown fences and prose around the object are tolerated, including prose
/// with braces of its own: every `{"social_media_links":` opening is tried in
/// order until one deserializes.
///
/// Entries without an `http://` or `https://` prefix are dropped, the same
/// filter [`scan_lines`] applies; `javascript:` and `data:` URLs never leave
/// this function.
///
/// # Errors
///
/// Returns [`AppError::Decode`] if neither the whole reply nor any embedded
/// object has that shape.
pub fn parse_structured(content: &str) -> Result<Vec<String>, AppError> {
    let trimmed = content.trim();

    let reply = match serde_json::from_str::<StructuredReply>(trimmed) {
        Ok(reply) => reply,
        Err(direct_err) => OBJECT_START_REGEX
            .find_iter(trimmed)
            .find_map(|start| leading_object(&trimmed[start.start()..]))
            .ok_or_else(|| {
                AppError::decode(format!("error parsing JSON content: {direct_err}"))
            })?,
    };

    Ok(reply
        .social_media_links
        .into_iter()
        .filter(|link| has_http_scheme(link))
        .collect())
}

/// Keeps every trimmed line that starts with `http://` or `https://`.
pub fn scan_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| has_http_scheme(line))
        .map(String::from)
        .collect()
}

/// Structured parse first, line scan as fallback.
///
/// Never fails: a reply with neither JSON nor URL lines yields an empty
/// line-scan result, which is how a model saying "no social links found"
/// comes through.
pub fn parse_reply(content: &str) -> SocialLinks {
    match parse_structured(content) {
        Ok(links) => {
            tracing::info!(path = "structured", count = links.len(), "parsed model reply");
            SocialLinks::structured(links)
        }
        Err(e) => {
            let links = scan_lines(content);
            tracing::info!(
                path = "line_scan",
                count = links.len(),
                reason = %e,
                "model reply was not structured, fell back to line scan"
            );
            SocialLinks::line_scan(links)
        }
    }
}
