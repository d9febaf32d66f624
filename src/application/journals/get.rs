use crate::domain::journals::{Journal, JournalRepository, Neighbours};
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JournalResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl From<Journal> for JournalResponse {
    fn from(journal: Journal) -> Self {
        Self {
            id: journal.id,
            title: journal.title,
            content: journal.content,
            user_id: journal.user_id,
            created_at: journal.created_at,
            updated_at: journal.updated_at,
        }
    }
}

pub struct GetJournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl GetJournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<JournalResponse, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("journal not found".to_string()))
    }

    /// The entry plus the ids of the entries before and after it.
    #[tracing::instrument(skip(self))]
    pub async fn execute_with_neighbours(
        &self,
        id: i64,
    ) -> Result<(JournalResponse, Neighbours), AppError> {
        let journal = self.execute(id).await?;
        let neighbours = self.repo.neighbours(id).await?;
        Ok((journal, neighbours))
    }
}
