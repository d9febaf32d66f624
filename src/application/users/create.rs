use crate::domain::password::PasswordHashingService;
use crate::domain::users::{NewUser, UserRepository};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

const ACCOUNT_EXISTS: &str = "another account already exists";

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    #[schema(example = "testuser")]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "testpassword")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

/// Creates the site owner. Refused once any account exists.
pub struct RegisterUserUseCase {
    repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl RegisterUserUseCase {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req), fields(name = %req.name))]
    pub async fn execute(&self, req: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let name = req.name.trim();
        if name.is_empty() || req.password.is_empty() {
            return Err(AppError::ValidationError(
                "name and password are required".to_string(),
            ));
        }

        if self.repo.count().await? > 0 {
            tracing::warn!("Registration refused: an account already exists");
            return Err(AppError::Conflict(ACCOUNT_EXISTS.to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&req.password)
            .map_err(|e| AppError::InternalServerError(e.into()))?;

        // a concurrent registration can still win the race; the table constraint decides
        let user = self
            .repo
            .create(NewUser {
                name: name.to_string(),
                password_hash,
            })
            .await?
            .ok_or_else(|| AppError::Conflict(ACCOUNT_EXISTS.to_string()))?;

        tracing::info!(user_id = user.id, "Account created");

        Ok(CreateUserResponse {
            name: user.name,
            created_at: user.created_at,
        })
    }
}
