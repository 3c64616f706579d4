//! Lookup form submission handler.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Redirect,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::IndexTemplate;

/// Form body of `POST /get_links`.
///
/// A missing `domain` field deserializes as empty and fails validation, so it
/// is reported as 400 rather than as an extractor rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct LinksForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 2048, message = "Domain must be 1-2048 characters"))]
    pub domain: String,
}

/// Runs a lookup for the submitted domain and renders the results.
///
/// # Endpoint
///
/// `POST /get_links` (form-encoded `domain`)
///
/// # Response Codes
///
/// - **200 OK**: HTML page listing the social links found
/// - **400 Bad Request**: blank or malformed domain, or a body that is not
///   form-encoded (plain text)
/// - **500 Internal Server Error**: any pipeline failure, message verbatim
///   (plain text); no partial results
pub async fn get_links_handler(
    State(state): State<AppState>,
    form: Result<Form<LinksForm>, FormRejection>,
) -> Result<IndexTemplate, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    form.validate()?;

    let lookup = state
        .social_link_service
        .find_social_links(&form.domain)
        .await?;

    tracing::info!(
        url = %lookup.target,
        links = ?lookup.social.links,
        "lookup finished"
    );

    Ok(IndexTemplate::with_results(
        form.domain,
        lookup.target,
        lookup.social.links,
    ))
}

/// Sends non-POST requests on `/get_links` back to the form.
///
/// Responds `303 See Other` with `Location: /`.
pub async fn redirect_to_form() -> Redirect {
    Redirect::to("/")
}
