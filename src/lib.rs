//! # Social Links
//!
//! Finds the social-media profile links on a web page. The page is fetched,
//! its absolute anchor targets are collected, and a chat-completion model is
//! asked which of them are social-media links.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Pipeline entities, prompt/reply logic and port traits
//! - **Application Layer** ([`application`]) - Lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetch, HTML parsing, LLM client, credentials
//! - **API Layer** ([`api`]) - Health endpoint and tracing middleware
//! - **Web Layer** ([`web`]) - HTML lookup form
//!
//! ## Pipeline
//!
//! 1. Normalize the submitted domain (`example.com` becomes `http://example.com`)
//! 2. Check the API key before any network call
//! 3. Fetch the page and collect `http(s)://` anchor targets in document order
//! 4. Prompt the model for `{"social_media_links": [...]}`
//! 5. Parse the reply as JSON, falling back to a line scan for URL lines
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run
//! # then open http://localhost:8086/
//!
//! # or from the terminal
//! cargo run --bin lookup -- example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SocialLinkService;
    pub use crate::domain::entities::{ApiKey, ExtractionPath, LinkLookup, LinkSet, SocialLinks};
    pub use crate::domain::ports::{CredentialProvider, LinkClassifier, LinkExtractor};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
