use crate::application::auth::token_utils::{generate_opaque_token, hash_token};
use crate::domain::auth::{NewRefreshToken, RefreshTokenRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error)]
pub enum RefreshTokenError {
    #[error("refresh token not found, expired or revoked")]
    NotFound,
    #[error("refresh token storage failed: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<RefreshTokenError> for AppError {
    fn from(err: RefreshTokenError) -> Self {
        match err {
            RefreshTokenError::NotFound => {
                AppError::Unauthorized("invalid refresh token".to_string())
            }
            RefreshTokenError::Storage(e) => AppError::InternalServerError(e),
        }
    }
}

/// Plaintext handed to the client once, at issuance.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    pub token: String,
    pub expires_at: OffsetDateTime,
}

/// Opaque refresh tokens persisted by digest only
#[derive(Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepository>,
    ttl: time::Duration,
}

impl RefreshTokenStore {
    pub fn new(repo: Arc<dyn RefreshTokenRepository>, ttl: time::Duration) -> Self {
        Self { repo, ttl }
    }

    #[tracing::instrument(skip(self))]
    pub async fn issue(&self, user_id: i64) -> Result<IssuedRefreshToken, RefreshTokenError> {
        let token = generate_opaque_token();
        let expires_at = OffsetDateTime::now_utc() + self.ttl;

        self.repo
            .create(NewRefreshToken {
                user_id,
                token_hash: hash_token(&token),
                expires_at,
            })
            .await?;

        Ok(IssuedRefreshToken { token, expires_at })
    }

    /// The owner of an active token. Expiry is never extended.
    #[tracing::instrument(skip_all)]
    pub async fn resolve_user(&self, token: &str) -> Result<i64, RefreshTokenError> {
        self.repo
            .find_active_by_hash(&hash_token(token))
            .await?
            .map(|stored| stored.user_id)
            .ok_or(RefreshTokenError::NotFound)
    }

    /// Idempotent for tokens that are already revoked.
    #[tracing::instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> Result<(), RefreshTokenError> {
        if self.repo.revoke_by_hash(&hash_token(token)).await? {
            Ok(())
        } else {
            Err(RefreshTokenError::NotFound)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn purge_expired(&self) -> Result<u64, RefreshTokenError> {
        Ok(self.repo.delete_expired().await?)
    }
}
