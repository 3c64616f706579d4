//! Utility functions shared by the web layer and the lookup pipeline.
//!
//! - [`url_normalizer`] - Lookup target normalization and href scheme checks

pub mod url_normalizer;
