use async_trait::async_trait;
use models::feedback::{self, Model, NewFeedback};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::feedback::repository::FeedbackRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmFeedbackRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn save(&self, record: NewFeedback) -> Result<Model, ServiceError> {
        Ok(feedback::create(&self.db, record).await?)
    }

    async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(feedback::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        Ok(feedback::find(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmFeedbackRepository::new(db);

        let saved = repo
            .save(NewFeedback { user_name: Some("repo".into()), message: Some("stored".into()), ..Default::default() })
            .await?;
        assert!(saved.id > 0);

        let found = repo.find_by_id(saved.id).await?.unwrap();
        assert_eq!(found, saved);
        assert!(repo.find_all().await?.contains(&saved));
        Ok(())
    }
}
