use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use models::analyzed_feedback::{AnalyzedFeedback, NewAnalyzedFeedback};
use service::analytics::{AnalyzedFeedbackRepository, AnalyzedFeedbackService};
use tower_http::cors::CorsLayer;

use crate::errors::ApiError;
use crate::openapi::AnalyticsApiDoc;
use crate::routes::{health, trace_layer};

#[derive(Clone)]
pub struct AnalyticsState {
    pub service: Arc<AnalyzedFeedbackService<dyn AnalyzedFeedbackRepository>>,
}

impl AnalyticsState {
    pub fn new(repo: Arc<dyn AnalyzedFeedbackRepository>) -> Self {
        Self { service: Arc::new(AnalyzedFeedbackService::new(repo)) }
    }
}

#[utoipa::path(
    post, path = "/api/analytics", tag = "analytics",
    request_body = crate::openapi::NewAnalyzedFeedbackDoc,
    responses((status = 200, description = "Saved", body = crate::openapi::AnalyzedFeedbackDoc))
)]
pub async fn save(
    State(state): State<AnalyticsState>,
    Json(input): Json<NewAnalyzedFeedback>,
) -> Result<Json<AnalyzedFeedback>, ApiError> {
    Ok(Json(state.service.save_feedback(input).await?))
}

#[utoipa::path(
    get, path = "/api/analytics", tag = "analytics",
    responses((status = 200, description = "All analyzed feedback", body = [crate::openapi::AnalyzedFeedbackDoc]))
)]
pub async fn list(State(state): State<AnalyticsState>) -> Result<Json<Vec<AnalyzedFeedback>>, ApiError> {
    Ok(Json(state.service.get_all_feedback().await?))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(AnalyticsApiDoc::openapi())
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Route table for the analytics service. Cross-origin requests are allowed from anywhere.
pub fn build_router(state: AnalyticsState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/analytics", get(list).post(save))
        .with_state(state)
        .layer(build_cors())
        .layer(trace_layer())
}
