//! Lookup form route configuration.

use crate::state::AppState;
use crate::web::handlers::{get_links_handler, index_handler, redirect_to_form};
use axum::{
    Router,
    routing::{get, post},
};

/// HTML form routes, no authentication.
///
/// # Endpoints
///
/// - `GET  /`          - Lookup form
/// - `POST /get_links` - Run a lookup and render the result page
/// - `*    /get_links` - Any other method redirects to `/` (303)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/get_links",
            post(get_links_handler).fallback(redirect_to_form),
        )
}
