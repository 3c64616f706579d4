//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Lookup form
//! - `POST /get_links`  - Run a lookup and render the result page
//! - `*    /get_links`  - Any other method redirects to `/`
//! - `GET  /health`     - Health check (credential presence)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router without path normalization.
///
/// Integration tests drive this directly; [`app_router`] wraps it for serving.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
