use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedbackDoc {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDoc {
    pub id: i64,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAnalyzedFeedbackDoc {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub sentiment_label: Option<String>,
    pub sentiment_score: f64,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedFeedbackDoc {
    pub id: String,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub sentiment_label: Option<String>,
    pub sentiment_score: f64,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::feedback::submit,
        crate::routes::feedback::list,
        crate::routes::feedback::get_by_id,
    ),
    components(schemas(HealthResponse, NewFeedbackDoc, FeedbackDoc)),
    tags((name = "health"), (name = "feedback"))
)]
pub struct FeedbackApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::analytics::save,
        crate::routes::analytics::list,
    ),
    components(schemas(HealthResponse, NewAnalyzedFeedbackDoc, AnalyzedFeedbackDoc)),
    tags((name = "health"), (name = "analytics"))
)]
pub struct AnalyticsApiDoc;
