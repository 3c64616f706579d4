//! API route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes, no authentication.
///
/// # Endpoints
///
/// - `GET /health` - Service health and credential presence
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
