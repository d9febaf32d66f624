use crate::domain::tags::{Tag, TagRepository};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TagSearchQuery {
    /// Case-insensitive substring of the tag name
    pub q: Option<String>,
}

/// Autocomplete entry for the tag picker
#[derive(Debug, Serialize, ToSchema)]
pub struct TagSuggestion {
    pub id: i64,
    #[schema(example = "rust")]
    pub value: String,
}

impl From<Tag> for TagSuggestion {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            value: tag.name,
        }
    }
}

pub struct SearchTagsUseCase {
    repo: Arc<dyn TagRepository>,
}

impl SearchTagsUseCase {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, query: TagSearchQuery) -> Result<Vec<TagSuggestion>, AppError> {
        let q = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::ValidationError("missing search query".to_string()))?;

        let tags = self.repo.search(q).await?;

        Ok(tags.into_iter().map(Into::into).collect())
    }
}
