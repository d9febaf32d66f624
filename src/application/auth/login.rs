use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::domain::auth::AuthService;
use crate::domain::password::{PasswordError, PasswordHashingService};
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "invalid name or password";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "testuser")]
    pub name: String,

    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "testpassword")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    /// Access token, valid for one hour by default
    pub token: String,
    pub refresh_token: String,
}

pub struct LoginUseCase {
    user_repo: Arc<dyn UserRepository>,
    auth_service: Arc<dyn AuthService>,
    password_service: Arc<dyn PasswordHashingService>,
    refresh_tokens: RefreshTokenStore,
}

impl LoginUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        auth_service: Arc<dyn AuthService>,
        password_service: Arc<dyn PasswordHashingService>,
        refresh_tokens: RefreshTokenStore,
    ) -> Self {
        Self {
            user_repo,
            auth_service,
            password_service,
            refresh_tokens,
        }
    }

    #[tracing::instrument(skip(self, req), fields(name = %req.name))]
    pub async fn execute(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        if req.name.trim().is_empty() || req.password.is_empty() {
            return Err(AppError::ValidationError(
                "name and password are required".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_name(&req.name)
            .await
            .map_err(|e| {
                tracing::error!("Database error finding user: {}", e);
                AppError::InternalServerError(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("Login attempt for unknown user");
                AppError::Unauthorized(INVALID_CREDENTIALS.to_string())
            })?;

        match self
            .password_service
            .verify_password(&req.password, &user.password_hash)
        {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!(user_id = user.id, "Password verification failed");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => {
                tracing::error!(user_id = user.id, "Password verification internal error: {}", e);
                return Err(AppError::InternalServerError(e.into()));
            }
        }

        let token = self
            .auth_service
            .issue_access_token(user.id)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        let refresh = self.refresh_tokens.issue(user.id).await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
            token,
            refresh_token: refresh.token,
        })
    }
}
