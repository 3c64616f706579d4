//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: A usable API key is configured
/// - **503 Service Unavailable**: Lookups would fail with a configuration error
///
/// # Components Checked
///
/// 1. **Credentials**: `OPENAI_API_KEY` is set and not a placeholder.
///    No request is sent to the classification endpoint.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "credentials": {
///       "status": "ok",
///       "message": "API key configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let credentials_check = check_credentials(&state);
    let healthy = credentials_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            credentials: credentials_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that a classification credential is configured.
fn check_credentials(state: &AppState) -> CheckStatus {
    if state.social_link_service.credentials_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("API key configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("API key not set or invalid".to_string()),
        }
    }
}
