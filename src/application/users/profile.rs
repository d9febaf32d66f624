use crate::domain::users::{UpdateProfile, User, UserRepository};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 5000, message = "bio is too long"))]
    pub bio: Option<String>,
    /// An empty string clears the address
    #[schema(example = "me@example.com")]
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            bio: user.bio,
            email: user.email,
            github: user.github,
            linkedin: user.linkedin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub struct UpdateProfileUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        if let Some(email) = req.email.as_deref().map(str::trim) {
            if !email.is_empty() && !email.validate_email() {
                return Err(AppError::ValidationError("invalid email format".to_string()));
            }
        }
        if req.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::ValidationError("name must not be empty".to_string()));
        }

        let update = UpdateProfile {
            name: req.name,
            bio: req.bio,
            email: req.email,
            github: req.github,
            linkedin: req.linkedin,
        };

        let user = if update.is_empty() {
            self.repo.find_by_id(user_id).await?
        } else {
            self.repo.update_profile(user_id, update).await?
        };

        user.map(Into::into)
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }
}

/// Public profile of the site owner, shown on the about page
pub struct GetOwnerProfileUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetOwnerProfileUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<ProfileResponse, AppError> {
        self.repo
            .find_owner()
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("no account has been created yet".to_string()))
    }
}
