//! Trait definitions for the outbound side of the lookup pipeline.
//!
//! These traits are the seams between the lookup service and the network.
//! Concrete implementations live in `crate::infrastructure`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Ports
//!
//! - [`LinkExtractor`] - Page fetch and anchor collection
//! - [`LinkClassifier`] - LLM-based social link selection
//! - [`CredentialProvider`] - Classification API key lookup
//!
//! # Testing
//!
//! See integration tests in `tests/link_extractor.rs` and
//! `tests/openai_classifier.rs` for the HTTP implementations.

pub mod credential_provider;
pub mod link_classifier;
pub mod link_extractor;

pub use credential_provider::CredentialProvider;
pub use link_classifier::LinkClassifier;
pub use link_extractor::LinkExtractor;

#[cfg(test)]
pub use credential_provider::MockCredentialProvider;
#[cfg(test)]
pub use link_classifier::MockLinkClassifier;
#[cfg(test)]
pub use link_extractor::MockLinkExtractor;
