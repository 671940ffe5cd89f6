use async_trait::async_trait;
use models::analyzed_feedback::{AnalyzedFeedback, NewAnalyzedFeedback};

use crate::errors::ServiceError;

/// Store adapter for analyzed feedback documents. There is no lookup by id.
#[async_trait]
pub trait AnalyzedFeedbackRepository: Send + Sync {
    async fn save(&self, record: NewAnalyzedFeedback) -> Result<AnalyzedFeedback, ServiceError>;
    async fn find_all(&self) -> Result<Vec<AnalyzedFeedback>, ServiceError>;
}
