use std::sync::Arc;

use models::feedback::{Model, NewFeedback};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::feedback::repository::FeedbackRepository;

/// Pass-through service over a [`FeedbackRepository`].
pub struct FeedbackService<R: FeedbackRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: FeedbackRepository + ?Sized> FeedbackService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn save_feedback(&self, record: NewFeedback) -> Result<Model, ServiceError> {
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "feedback_saved");
        Ok(saved)
    }

    pub async fn get_all_feedback(&self) -> Result<Vec<Model>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "feedback_listed");
        Ok(all)
    }

    pub async fn get_feedback_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }
}
