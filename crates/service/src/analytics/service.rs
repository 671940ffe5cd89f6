use std::sync::Arc;

use models::analyzed_feedback::{AnalyzedFeedback, NewAnalyzedFeedback};
use tracing::{debug, info, instrument};

use crate::analytics::repository::AnalyzedFeedbackRepository;
use crate::errors::ServiceError;

/// Pass-through service over an [`AnalyzedFeedbackRepository`].
pub struct AnalyzedFeedbackService<R: AnalyzedFeedbackRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AnalyzedFeedbackRepository + ?Sized> AnalyzedFeedbackService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn save_feedback(&self, record: NewAnalyzedFeedback) -> Result<AnalyzedFeedback, ServiceError> {
        let saved = self.repo.save(record).await?;
        info!(id = %saved.id, label = ?saved.sentiment_label, "analyzed_feedback_saved");
        Ok(saved)
    }

    pub async fn get_all_feedback(&self) -> Result<Vec<AnalyzedFeedback>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "analyzed_feedback_listed");
        Ok(all)
    }
}
