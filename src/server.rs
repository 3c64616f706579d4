//! HTTP server initialization and runtime setup.
//!
//! Wires the outbound HTTP client, the lookup pipeline and the Axum server.

use crate::application::services::SocialLinkService;
use crate::config::Config;
use crate::domain::ports::CredentialProvider;
use crate::infrastructure::credentials::EnvCredentials;
use crate::infrastructure::http::{HttpLinkExtractor, build_http_client};
use crate::infrastructure::llm::OpenAiClassifier;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the lookup service from configuration.
///
/// One reqwest client is shared by the extractor and the classifier so both
/// use the same connection pool and timeout.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_service(
    config: &Config,
    credentials: Arc<dyn CredentialProvider>,
) -> Result<SocialLinkService> {
    let client =
        build_http_client(config.fetch_timeout()).context("Failed to build HTTP client")?;

    let extractor = Arc::new(HttpLinkExtractor::new(client.clone()));
    let classifier = Arc::new(OpenAiClassifier::new(client, config.classifier_settings()));

    Ok(SocialLinkService::new(extractor, classifier, credentials))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Outbound HTTP client and lookup pipeline
/// - Environment-backed credential provider (read per request)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = build_service(&config, Arc::new(EnvCredentials::default()))?;

    if !service.credentials_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; lookups will fail until it is");
    }

    let state = AppState::new(Arc::new(service));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
