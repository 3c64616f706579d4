//! Infrastructure layer for outbound integrations.
//!
//! This layer implements the ports defined by the domain layer, providing
//! concrete implementations backed by the network and the process environment.
//!
//! # Modules
//!
//! - [`http`] - Shared reqwest client and the HTML link extractor
//! - [`llm`] - Chat-completion classifier
//! - [`credentials`] - API key providers (environment, static)

pub mod credentials;
pub mod http;
pub mod llm;
