use crate::domain::journals::{JournalRepository, NewJournal};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJournalRequest {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    #[schema(example = "A day in the life")]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    #[schema(example = "<p>Today I wrote some Rust.</p>")]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateJournalResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    pub user_id: i64,
}

pub struct CreateJournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl CreateJournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        user_id: i64,
        req: CreateJournalRequest,
    ) -> Result<CreateJournalResponse, AppError> {
        if req.title.trim().is_empty() || req.content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "title and content are required".to_string(),
            ));
        }

        let journal = self
            .repo
            .create(NewJournal {
                title: req.title.trim().to_string(),
                content: req.content,
                user_id,
            })
            .await?;

        tracing::info!(journal_id = journal.id, "Journal created");

        Ok(CreateJournalResponse {
            id: journal.id,
            title: journal.title,
            content: journal.content,
            created_at: journal.created_at,
            user_id: journal.user_id,
        })
    }
}
