//! Application layer services implementing the lookup use case.
//!
//! This layer orchestrates domain operations by coordinating port calls and
//! validation. Services consume port traits and provide a clean API for HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::social_link_service::SocialLinkService`] - Page scrape + link classification

pub mod services;
