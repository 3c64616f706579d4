//! Shared outbound HTTP client.

use reqwest::{Client, redirect};
use std::time::Duration;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed when fetching a page.
const MAX_REDIRECTS: usize = 10;

/// Builds the client used for both the page fetch and the classification call.
///
/// `timeout` bounds each whole request; `None` keeps reqwest's default of no
/// timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("social-links/"));
    }

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some(Duration::from_secs(5))).is_ok());
    }
}
