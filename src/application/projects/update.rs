use crate::application::projects::create::{
    REQUIRED_FIELDS, SavedProjectResponse, TagInput, non_blank, parse_status, parse_tags,
};
use crate::domain::projects::{ProjectRepository, UpdateProject};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectRequest {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,
    #[validate(length(max = 255, message = "title is too long"))]
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: String,
    pub github: String,
    pub status: Option<String>,
    /// Omit to keep the current tags; an empty list removes them all
    pub tags: Option<Vec<TagInput>>,
}

pub struct UpdateProjectUseCase {
    repo: Arc<dyn ProjectRepository>,
}

impl UpdateProjectUseCase {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(project_id = req.id))]
    pub async fn execute(
        &self,
        user_id: i64,
        req: UpdateProjectRequest,
    ) -> Result<SavedProjectResponse, AppError> {
        let (Some(title), Some(description), Some(link), Some(github)) = (
            non_blank(&req.title),
            non_blank(&req.description),
            non_blank(&req.link),
            non_blank(&req.github),
        ) else {
            return Err(AppError::ValidationError(REQUIRED_FIELDS.to_string()));
        };
        let status = parse_status(req.status.as_deref())?;
        let tags = req.tags.as_deref().map(parse_tags).transpose()?;

        let project = self
            .repo
            .find_by_id(req.id)
            .await?
            .ok_or_else(|| AppError::NotFound("project not found".to_string()))?;

        if project.user_id != user_id {
            return Err(AppError::Forbidden(
                "you can only update your own projects".to_string(),
            ));
        }

        let saved = self
            .repo
            .update(
                req.id,
                UpdateProject {
                    title,
                    description,
                    image_url: req.image_url.as_deref().and_then(non_blank),
                    link: Some(link),
                    github: Some(github),
                    status,
                    tags,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("project not found".to_string()))?;

        Ok(saved.into())
    }
}
