//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8086`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OPENAI_API_URL` - Chat-completion endpoint
//!   (default: `https://api.openai.com/v1/chat/completions`)
//! - `OPENAI_MODEL` - Model identifier (default: `gpt-4`)
//! - `OPENAI_MAX_TOKENS` - Output token budget (default: 1024, max: 32768)
//! - `FETCH_TIMEOUT_SECS` - Timeout for each outbound request (default: none)
//!
//! ## Credential
//!
//! `OPENAI_API_KEY` is intentionally not part of [`Config`]. It is read from
//! the environment on every lookup by
//! [`crate::infrastructure::credentials::EnvCredentials`], so the server starts
//! without it and picks it up once it is set.

use crate::infrastructure::llm::openai_classifier::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
use crate::infrastructure::llm::ClassifierSettings;
use anyhow::Result;
use std::env;
use std::time::Duration;

const MAX_TOKENS_LIMIT: u32 = 32_768;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Chat-completion endpoint the classifier posts to.
    pub openai_api_url: String,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    /// Whole-request timeout for the page fetch and the classification call.
    /// `None` keeps the HTTP client defaults.
    pub fetch_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8086".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let openai_api_url =
            env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let openai_max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            listen_addr,
            log_level,
            log_format,
            openai_api_url,
            openai_model,
            openai_max_tokens,
            fetch_timeout_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `openai_api_url` is not an HTTP(S) URL
    /// - `openai_model` is empty
    /// - `openai_max_tokens` is outside `1..=32768`
    /// - `fetch_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.openai_api_url.starts_with("http://")
            && !self.openai_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "OPENAI_API_URL must start with 'http://' or 'https://', got '{}'",
                self.openai_api_url
            );
        }

        if self.openai_model.trim().is_empty() {
            anyhow::bail!("OPENAI_MODEL must not be empty");
        }

        if self.openai_max_tokens == 0 || self.openai_max_tokens > MAX_TOKENS_LIMIT {
            anyhow::bail!(
                "OPENAI_MAX_TOKENS must be between 1 and {}, got {}",
                MAX_TOKENS_LIMIT,
                self.openai_max_tokens
            );
        }

        if self.fetch_timeout_secs == Some(0) {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Classifier endpoint and request parameters.
    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            endpoint: self.openai_api_url.clone(),
            model: self.openai_model.clone(),
            max_tokens: self.openai_max_tokens,
        }
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// Prints configuration summary (the credential is never part of it).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Classifier endpoint: {}", self.openai_api_url);
        tracing::info!("  Model: {}", self.openai_model);
        tracing::info!("  Max tokens: {}", self.openai_max_tokens);

        match self.fetch_timeout_secs {
            Some(secs) => tracing::info!("  Outbound timeout: {}s", secs),
            None => tracing::info!("  Outbound timeout: client default"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
