//! Request-scoped entities of the lookup pipeline.
//!
//! Nothing here is persisted: every value lives for the duration of one lookup.
//!
//! # Entity Types
//!
//! - [`LinkSet`] - Absolute links scraped from a page, in document order
//! - [`SocialLinks`] - Links the classifier selected, with the parsing path used
//! - [`LinkLookup`] - Full outcome of one lookup
//! - [`ApiKey`] - Validated classification credential

pub mod api_key;
pub mod link_set;
pub mod social_links;

pub use api_key::ApiKey;
pub use link_set::LinkSet;
pub use social_links::{ExtractionPath, LinkLookup, SocialLinks};
