//! Browser-facing layer: the lookup form and its result page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form submission handlers
//! - [`routes`] - Form route configuration

pub mod handlers;
pub mod routes;
