use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::shared::error::AppError;

pub struct RevokeUseCase {
    refresh_tokens: RefreshTokenStore,
}

impl RevokeUseCase {
    pub fn new(refresh_tokens: RefreshTokenStore) -> Self {
        Self { refresh_tokens }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<(), AppError> {
        self.refresh_tokens.revoke(refresh_token).await?;
        tracing::info!("Refresh token revoked");
        Ok(())
    }
}
