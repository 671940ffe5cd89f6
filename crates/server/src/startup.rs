use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::analytics::JsonDocumentRepository;
use service::feedback::SeaOrmFeedbackRepository;
use tracing::info;

use crate::routes::analytics::{self, AnalyticsState};
use crate::routes::feedback::{self, FeedbackState};

/// Connect to PostgreSQL, apply pending migrations and serve `/api/feedback`.
pub async fn run_feedback(cfg: AppConfig) -> anyhow::Result<()> {
    cfg.database.validate()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!(service = "feedback", event = "migrated", "database schema up to date");

    let state = FeedbackState::new(Arc::new(SeaOrmFeedbackRepository::new(db)));
    serve("feedback", cfg.feedback.bind_addr()?, feedback::build_router(state)).await
}

/// Open the `analyzed_feedback` collection and serve `/api/analytics`.
pub async fn run_analytics(cfg: AppConfig) -> anyhow::Result<()> {
    let repo = JsonDocumentRepository::open(&cfg.analytics.data_path).await?;
    info!(service = "analytics", path = %cfg.analytics.data_path, collection = models::analyzed_feedback::COLLECTION, "document store opened");

    let state = AnalyticsState::new(Arc::new(repo));
    serve("analytics", cfg.analytics.server.bind_addr()?, analytics::build_router(state)).await
}

async fn serve(service: &'static str, addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service, %addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(service))
        .await?;
    Ok(())
}

async fn shutdown_signal(service: &'static str) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service, event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}
