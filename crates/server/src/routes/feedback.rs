use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, routing::get, Json, Router};
use models::feedback::{Model, NewFeedback};
use service::errors::ServiceError;
use service::feedback::{FeedbackRepository, FeedbackService};

use crate::errors::ApiError;
use crate::openapi::FeedbackApiDoc;
use crate::routes::{health, trace_layer};

#[derive(Clone)]
pub struct FeedbackState {
    pub service: Arc<FeedbackService<dyn FeedbackRepository>>,
}

impl FeedbackState {
    pub fn new(repo: Arc<dyn FeedbackRepository>) -> Self {
        Self { service: Arc::new(FeedbackService::new(repo)) }
    }
}

#[utoipa::path(
    post, path = "/api/feedback", tag = "feedback",
    request_body = crate::openapi::NewFeedbackDoc,
    responses((status = 201, description = "Created", body = crate::openapi::FeedbackDoc))
)]
pub async fn submit(
    State(state): State<FeedbackState>,
    Json(input): Json<NewFeedback>,
) -> Result<(StatusCode, Json<Model>), ApiError> {
    let saved = state.service.save_feedback(input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get, path = "/api/feedback", tag = "feedback",
    responses((status = 200, description = "All feedback", body = [crate::openapi::FeedbackDoc]))
)]
pub async fn list(State(state): State<FeedbackState>) -> Result<Json<Vec<Model>>, ApiError> {
    Ok(Json(state.service.get_all_feedback().await?))
}

#[utoipa::path(
    get, path = "/api/feedback/{id}", tag = "feedback",
    params(("id" = i64, Path, description = "Feedback id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::FeedbackDoc),
        (status = 404, description = "No feedback with this id")
    )
)]
pub async fn get_by_id(
    State(state): State<FeedbackState>,
    Path(id): Path<i64>,
) -> Result<Json<Model>, ApiError> {
    state
        .service
        .get_feedback_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("feedback").into())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(FeedbackApiDoc::openapi())
}

/// Route table for the feedback service.
pub fn build_router(state: FeedbackState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/feedback", get(list).post(submit))
        .route("/api/feedback/:id", get(get_by_id))
        .with_state(state)
        .layer(trace_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use models::errors::ModelError;
    use serde_json::{json, Value};
    use service::feedback::repository::mock::MockFeedbackRepository;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(FeedbackState::new(Arc::new(MockFeedbackRepository::default())))
    }

    /// Repository whose store is unreachable.
    struct UnreachableStore;

    #[async_trait::async_trait]
    impl FeedbackRepository for UnreachableStore {
        async fn save(&self, _record: NewFeedback) -> Result<Model, ServiceError> {
            Err(ModelError::Db("connection refused".into()).into())
        }

        async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
            Err(ModelError::Db("connection refused".into()).into())
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Model>, ServiceError> {
            Err(ModelError::Db("connection refused".into()).into())
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn post_then_get_by_id_and_missing() {
        let app = app();

        let res = app.clone().oneshot(post_json("/api/feedback", json!({"message": "great"}))).await.unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created = body_json(res).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["message"], "great");

        let res = app.clone().oneshot(get("/api/feedback/1")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, created);

        let res = app.oneshot(get("/api/feedback/999")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn client_id_is_ignored() {
        let app = app();
        let res = app.oneshot(post_json("/api/feedback", json!({"id": 42, "userName": "bob"}))).await.unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created = body_json(res).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["userName"], "bob");
    }

    #[tokio::test]
    async fn list_contains_all_posts() {
        let app = app();
        for msg in ["a", "b", "c"] {
            let res = app.clone().oneshot(post_json("/api/feedback", json!({"message": msg}))).await.unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
        }
        let res = app.oneshot(get("/api/feedback")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let all = body_json(res).await;
        let messages: Vec<_> = all.as_array().unwrap().iter().map(|f| f["message"].clone()).collect();
        assert_eq!(messages, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_by_router() {
        let res = app().oneshot(get("/api/feedback/abc")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_and_openapi() {
        let app = app();
        let res = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "ok");

        let res = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let doc = body_json(res).await;
        assert!(doc["paths"].get("/api/feedback/{id}").is_some());
    }

    #[tokio::test]
    async fn store_failure_is_500_with_error_body() {
        let app = build_router(FeedbackState::new(Arc::new(UnreachableStore)));

        let res = app.clone().oneshot(post_json("/api/feedback", json!({"message": "lost"}))).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await["error"], "database error: connection refused");

        let res = app.clone().oneshot(get("/api/feedback")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await["error"], "database error: connection refused");

        let res = app.oneshot(get("/api/feedback/1")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(res).await["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_bodies_get_json_rejections() {
        let app = app();

        let req = Request::builder()
            .method("POST")
            .uri("/api/feedback")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::BAD_REQUEST);

        let req = Request::builder()
            .method("POST")
            .uri("/api/feedback")
            .body(Body::from(r#"{"message":"great"}"#))
            .unwrap();
        assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let res = app.clone().oneshot(post_json("/api/feedback", json!({"message": 5}))).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // nothing was stored by the rejected requests
        let res = app.oneshot(get("/api/feedback")).await.unwrap();
        assert_eq!(body_json(res).await, json!([]));
    }
}
