use async_trait::async_trait;
use models::feedback::{Model, NewFeedback};

use crate::errors::ServiceError;

/// Store adapter for feedback records.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a record; the returned copy carries the store-assigned id.
    async fn save(&self, record: NewFeedback) -> Result<Model, ServiceError>;
    /// All records in store order.
    async fn find_all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MockFeedbackRepository {
        rows: Mutex<Vec<Model>>,
    }

    #[async_trait]
    impl FeedbackRepository for MockFeedbackRepository {
        async fn save(&self, record: NewFeedback) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            let id = rows.last().map_or(1, |r| r.id + 1);
            let saved = record.into_model(id);
            rows.push(saved.clone());
            Ok(saved)
        }

        async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
            Ok(self.rows.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|r| r.id == id).cloned())
        }
    }
}
