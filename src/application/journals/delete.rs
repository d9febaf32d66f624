use crate::domain::journals::JournalRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteJournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl DeleteJournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        let journal = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("journal not found".to_string()))?;

        if journal.user_id != user_id {
            return Err(AppError::Forbidden(
                "you can only delete your own journals".to_string(),
            ));
        }

        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("journal not found".to_string()));
        }

        tracing::info!(journal_id = id, "Journal deleted");
        Ok(())
    }
}
