//! Application error type shared by every layer.
//!
//! Each variant corresponds to one failure kind of the lookup pipeline. All of
//! them are terminal for the request that produced them: nothing is retried and
//! no partial result is returned.
//!
//! # HTTP mapping
//!
//! Errors render as `text/plain` with the message verbatim:
//!
//! - [`AppError::Validation`] - `400 Bad Request`
//! - every other kind - `500 Internal Server Error`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted form could not be turned into a lookup target.
    #[error("{0}")]
    Validation(String),

    /// The classification credential is missing or is a placeholder.
    #[error("{0}")]
    Config(String),

    /// The target page was unreachable, answered with a non-success status, or
    /// its body transfer failed.
    #[error("{0}")]
    Fetch(String),

    /// The target page body is not an HTML document.
    #[error("{0}")]
    Parse(String),

    /// The classification endpoint failed or answered with a non-success status.
    #[error("{0}")]
    Remote(String),

    /// The classification reply did not have the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Short machine-readable name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Config(_) => "config_error",
            AppError::Fetch(_) => "fetch_error",
            AppError::Parse(_) => "parse_error",
            AppError::Remote(_) => "remote_error",
            AppError::Decode(_) => "decode_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("invalid value for `{field}`"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::warn!(kind = self.kind(), error = %self, "lookup failed");
        }

        (status, self.to_string()).into_response()
    }
}
