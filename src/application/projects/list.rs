use crate::application::projects::get::ProjectResponse;
use crate::domain::projects::ProjectRepository;
use crate::shared::error::AppError;
use crate::shared::pagination::PageQuery;
use std::sync::Arc;

pub struct ListProjectsUseCase {
    repo: Arc<dyn ProjectRepository>,
}

impl ListProjectsUseCase {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, query: PageQuery) -> Result<Vec<ProjectResponse>, AppError> {
        query.validate()?;

        let projects = self.repo.find_all(query.limit, query.offset).await?;

        Ok(projects.into_iter().map(Into::into).collect())
    }
}
