use std::sync::Arc;

use async_trait::async_trait;
use models::analyzed_feedback::{AnalyzedFeedback, NewAnalyzedFeedback};
use uuid::Uuid;

use crate::analytics::repository::AnalyzedFeedbackRepository;
use crate::errors::ServiceError;
use crate::storage::json_collection_store::JsonCollectionStore;

/// Document-store adapter over a JSON collection file. Ids are UUID v4 strings.
pub struct JsonDocumentRepository {
    store: Arc<JsonCollectionStore<AnalyzedFeedback>>,
}

impl JsonDocumentRepository {
    pub fn new(store: Arc<JsonCollectionStore<AnalyzedFeedback>>) -> Self { Self { store } }

    pub async fn open(path: &str) -> Result<Self, ServiceError> {
        Ok(Self::new(JsonCollectionStore::new(path).await?))
    }
}

#[async_trait]
impl AnalyzedFeedbackRepository for JsonDocumentRepository {
    async fn save(&self, record: NewAnalyzedFeedback) -> Result<AnalyzedFeedback, ServiceError> {
        let doc = record.into_document(Uuid::new_v4().to_string());
        self.store.insert(doc).await
    }

    async fn find_all(&self) -> Result<Vec<AnalyzedFeedback>, ServiceError> {
        Ok(self.store.list().await)
    }
}
