use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::domain::auth::AuthService;
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponse {
    pub token: String,
}

/// Exchanges a refresh token for a fresh access token. The refresh token itself is kept.
pub struct RefreshUseCase {
    refresh_tokens: RefreshTokenStore,
    auth_service: Arc<dyn AuthService>,
}

impl RefreshUseCase {
    pub fn new(refresh_tokens: RefreshTokenStore, auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            refresh_tokens,
            auth_service,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let user_id = self.refresh_tokens.resolve_user(refresh_token).await?;

        let token = self
            .auth_service
            .issue_access_token(user_id)
            .map_err(|e| AppError::InternalServerError(e.into()))?;

        Ok(RefreshResponse { token })
    }
}
