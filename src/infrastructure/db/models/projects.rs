use crate::domain::projects::{Project, ProjectStatus};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Project row joined with its aggregated tag names
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDbModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub status: String,
    pub user_id: i64,
    pub tags: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<ProjectDbModel> for Project {
    type Error = anyhow::Error;

    fn try_from(model: ProjectDbModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<ProjectStatus>()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            link: model.link,
            github: model.github,
            status,
            user_id: model.user_id,
            tags: model.tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
