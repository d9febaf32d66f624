use crate::domain::projects::ProjectRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteProjectUseCase {
    repo: Arc<dyn ProjectRepository>,
}

impl DeleteProjectUseCase {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        let project = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("project not found".to_string()))?;

        if project.user_id != user_id {
            return Err(AppError::Forbidden(
                "you can only delete your own projects".to_string(),
            ));
        }

        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("project not found".to_string()));
        }

        tracing::info!(project_id = id, "Project deleted");
        Ok(())
    }
}
