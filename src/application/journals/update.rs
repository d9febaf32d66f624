use crate::domain::journals::{JournalRepository, UpdateJournal};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateJournalRequest {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "journal updated successfully")]
    pub message: String,
}

pub struct UpdateJournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl UpdateJournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(journal_id = req.id))]
    pub async fn execute(
        &self,
        user_id: i64,
        req: UpdateJournalRequest,
    ) -> Result<MessageResponse, AppError> {
        if req.title.trim().is_empty() || req.content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "title and content are required".to_string(),
            ));
        }

        let journal = self
            .repo
            .find_by_id(req.id)
            .await?
            .ok_or_else(|| AppError::NotFound("journal not found".to_string()))?;

        if journal.user_id != user_id {
            tracing::warn!(owner = journal.user_id, "Journal update by non-owner");
            return Err(AppError::Forbidden(
                "you can only update your own journals".to_string(),
            ));
        }

        self.repo
            .update(
                req.id,
                UpdateJournal {
                    title: req.title.trim().to_string(),
                    content: req.content,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("journal not found".to_string()))?;

        Ok(MessageResponse {
            message: "journal updated successfully".to_string(),
        })
    }
}
