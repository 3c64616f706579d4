//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// A lookup spends almost all of its time in the two outbound calls, so the
/// response latency logged here is effectively page fetch + classification.
///
/// **On Request:** span at `INFO` with method, URI and HTTP version.
///
/// **On Response:** `INFO` event with status and latency in milliseconds.
///
/// **On Failure:** 5xx responses additionally log at `WARN`.
///
/// ```text
/// INFO request{method=POST uri=/get_links version=HTTP/1.1}: finished processing request latency=2140 ms status=200
/// WARN request{method=POST uri=/get_links version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=310 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
