//! Normalization of user-supplied lookup targets and href filtering.

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Errors that can occur while turning form input into a fetchable URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Domain must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Returns `true` if `value` starts with `http://` or `https://`.
///
/// The check is a plain prefix match: relative paths, protocol-relative
/// `//host` links and other schemes (`javascript:`, `mailto:`) are rejected.
pub fn has_http_scheme(value: &str) -> bool {
    value.starts_with(HTTP_PREFIX) || value.starts_with(HTTPS_PREFIX)
}

/// Prefixes `http://` unless the input already carries an HTTP(S) scheme.
///
/// Idempotent on already-prefixed input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(ensure_protocol("example.com"), "http://example.com");
/// assert_eq!(ensure_protocol("https://example.com"), "https://example.com");
/// ```
pub fn ensure_protocol(input: &str) -> String {
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("{HTTP_PREFIX}{input}")
    }
}

/// Trims the raw form value, applies [`ensure_protocol`] and checks that the
/// result parses as a URL with a host.
///
/// The returned string is the normalized input, not the re-serialized [`Url`],
/// so `example.com` becomes `http://example.com` without a trailing slash.
///
/// # Errors
///
/// - [`UrlNormalizationError::Empty`] for blank input
/// - [`UrlNormalizationError::InvalidFormat`] when the URL parser rejects it
/// - [`UrlNormalizationError::MissingHost`] when the URL has no host
pub fn normalize_target(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let normalized = ensure_protocol(trimmed);
    let url =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_protocol_adds_http() {
        assert_eq!(ensure_protocol("example.com"), "http://example.com");
    }

    #[test]
    fn test_ensure_protocol_keeps_https() {
        assert_eq!(ensure_protocol("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_ensure_protocol_keeps_http() {
        assert_eq!(ensure_protocol("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_ensure_protocol_is_idempotent() {
        let once = ensure_protocol("example.com/about");
        assert_eq!(ensure_protocol(&once), once);
    }

    #[test]
    fn test_ensure_protocol_prefixes_other_schemes() {
        assert_eq!(ensure_protocol("ftp://example.com"), "http://ftp://example.com");
    }

    #[test]
    fn test_has_http_scheme() {
        assert!(has_http_scheme("http://a.com"));
        assert!(has_http_scheme("https://a.com/x?y=1"));
        assert!(!has_http_scheme("/relative"));
        assert!(!has_http_scheme("//cdn.example.com/x"));
        assert!(!has_http_scheme("javascript:void(0)"));
        assert!(!has_http_scheme("mailto:hi@example.com"));
        assert!(!has_http_scheme(""));
    }

    #[test]
    fn test_normalize_target_trims_and_prefixes() {
        assert_eq!(
            normalize_target("  example.com \n").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_normalize_target_keeps_path_and_port() {
        assert_eq!(
            normalize_target("localhost:8080/team").unwrap(),
            "http://localhost:8080/team"
        );
    }

    #[test]
    fn test_normalize_target_empty() {
        assert!(matches!(
            normalize_target("   "),
            Err(UrlNormalizationError::Empty)
        ));
    }

    #[test]
    fn test_normalize_target_invalid() {
        assert!(matches!(
            normalize_target("exa mple.com"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_target_https_passthrough() {
        assert_eq!(
            normalize_target("https://example.com/").unwrap(),
            "https://example.com/"
        );
    }
}
