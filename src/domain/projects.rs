use super::journals::Neighbours;
use super::tags::Tag;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "in_progress")]
    InProgress,
    #[default]
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "archived")]
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub status: ProjectStatus,
    pub user_id: i64,
    /// Tag names, alphabetical
    pub tags: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A tag as referenced from a project write: an existing id, or a name to find or create.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagRef {
    Id(i64),
    Name(String),
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub status: ProjectStatus,
    pub user_id: i64,
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub status: ProjectStatus,
    /// `None` keeps the current tag links
    pub tags: Option<Vec<TagRef>>,
}

/// A project together with the tags linked by the write that produced it.
#[derive(Debug, Clone)]
pub struct SavedProject {
    pub project: Project,
    pub tags: Vec<Tag>,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert the project, resolve every tag and link it, all in one transaction.
    async fn create_with_tags(&self, new_project: NewProject) -> Result<SavedProject, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, anyhow::Error>;
    /// Newest first
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, anyhow::Error>;
    /// Update the row and, when tags are given, replace its links in one transaction.
    async fn update(
        &self,
        id: i64,
        update: UpdateProject,
    ) -> Result<Option<SavedProject>, anyhow::Error>;
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error>;
    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error>;
}
