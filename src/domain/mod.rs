//! Domain layer: pipeline entities, pure logic and outbound ports.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped data structures
//! - [`ports`] - Traits for page extraction, classification and credentials
//! - [`prompt`] - Classification prompt builder
//! - [`reply`] - Two-stage parsing of the model reply
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])
//!
//! # Lookup Flow
//!
//! 1. Web handler receives a form submission
//! 2. [`ports::CredentialProvider`] resolves the API key
//! 3. [`ports::LinkExtractor`] scrapes the page into a [`entities::LinkSet`]
//! 4. [`prompt::build_classification_prompt`] renders the prompt
//! 5. [`ports::LinkClassifier`] calls the model and [`reply::parse_reply`] reads the answer

pub mod entities;
pub mod ports;
pub mod prompt;
pub mod reply;
