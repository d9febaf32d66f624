use crate::domain::journals::Neighbours;
use crate::domain::projects::{Project, ProjectRepository};
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    #[schema(example = "completed")]
    pub status: String,
    pub user_id: i64,
    /// Tag names, alphabetical
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            link: project.link,
            github: project.github,
            status: project.status.to_string(),
            user_id: project.user_id,
            tags: project.tags,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

pub struct GetProjectUseCase {
    repo: Arc<dyn ProjectRepository>,
}

impl GetProjectUseCase {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<ProjectResponse, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("project not found".to_string()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute_with_neighbours(
        &self,
        id: i64,
    ) -> Result<(ProjectResponse, Neighbours), AppError> {
        let project = self.execute(id).await?;
        let neighbours = self.repo.neighbours(id).await?;
        Ok((project, neighbours))
    }
}
