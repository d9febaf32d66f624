use crate::application::projects::get::ProjectResponse;
use crate::domain::projects::{NewProject, ProjectRepository, ProjectStatus, SavedProject, TagRef};
use crate::domain::tags::Tag;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

pub(crate) const REQUIRED_FIELDS: &str = "title, description, link and github are required";

/// A tag reference: an existing `id`, or a `name` that is found or created.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TagInput {
    pub id: Option<i64>,
    #[schema(example = "rust")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    #[validate(length(max = 255, message = "title is too long"))]
    #[schema(example = "my-journal")]
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: String,
    pub github: String,
    /// `in_progress`, `completed` (default) or `archived`
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagInput>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// A written project with the tags it is now linked to
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub status: String,
    pub user_id: i64,
    pub tags: Vec<TagResponse>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl From<SavedProject> for SavedProjectResponse {
    fn from(saved: SavedProject) -> Self {
        let project = ProjectResponse::from(saved.project);
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            link: project.link,
            github: project.github,
            status: project.status,
            user_id: project.user_id,
            tags: saved.tags.into_iter().map(Into::into).collect(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Trimmed value, or `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn parse_status(status: Option<&str>) -> Result<ProjectStatus, AppError> {
    match status.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(ProjectStatus::default()),
        Some(s) => s.parse().map_err(|_| {
            AppError::ValidationError(
                "invalid status: must be in_progress, completed or archived".to_string(),
            )
        }),
    }
}

/// Every input must carry a positive id or a non-empty name; an id of zero or
/// less counts as absent. Repeats are dropped, first wins.
pub(crate) fn parse_tags(inputs: &[TagInput]) -> Result<Vec<TagRef>, AppError> {
    let mut refs: Vec<TagRef> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let id = input.id.filter(|id| *id > 0);
        let tag_ref = match (id, input.name.as_deref().and_then(non_blank)) {
            (Some(id), _) => TagRef::Id(id),
            (None, Some(name)) => TagRef::Name(name),
            _ => return Err(AppError::ValidationError("invalid tag".to_string())),
        };
        if !refs.contains(&tag_ref) {
            refs.push(tag_ref);
        }
    }
    Ok(refs)
}

pub struct CreateProjectUseCase {
    repo: Arc<dyn ProjectRepository>,
}

impl CreateProjectUseCase {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        user_id: i64,
        req: CreateProjectRequest,
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
        let tags = parse_tags(&req.tags)?;

        let saved = self
            .repo
            .create_with_tags(NewProject {
                title,
                description,
                image_url: req.image_url.as_deref().and_then(non_blank),
                link: Some(link),
                github: Some(github),
                status,
                user_id,
                tags,
            })
            .await?;

        tracing::info!(project_id = saved.project.id, tags = saved.tags.len(), "Project created");

        Ok(saved.into())
    }
}
