//! Lookup form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the lookup page.
///
/// Renders `templates/index.html` with:
/// - Domain input form (prefilled with the last submitted value)
/// - Result list, once a lookup has run
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub domain: String,
    /// Normalized URL that was looked up; `None` renders the bare form.
    pub target: Option<String>,
    pub links: Vec<String>,
}

impl IndexTemplate {
    pub fn empty() -> Self {
        Self {
            domain: String::new(),
            target: None,
            links: Vec::new(),
        }
    }

    pub fn with_results(domain: String, target: String, links: Vec<String>) -> Self {
        Self {
            domain,
            target: Some(target),
            links,
        }
    }
}

/// Renders the lookup form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate::empty()
}
