use axum::Json;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tracing::Level;

use common::types::Health;

pub mod analytics;
pub mod feedback;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Request tracing shared by both services.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        // span per request with method and path, INFO level
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        // status code and latency
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        // 5xx logged as ERROR
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
