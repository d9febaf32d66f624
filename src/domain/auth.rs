use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Issuer claim stamped on every access token.
pub const TOKEN_ISSUER: &str = "my-journal";

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    /// Subject (user ID as a decimal string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn new_access_token(user_id: i64, expiry_seconds: i64) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: Some(user_id.to_string()),
            iat: now,
            exp: now + expiry_seconds,
        }
    }

    pub fn user_id(&self) -> Result<i64, TokenError> {
        let sub = self
            .sub
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(TokenError::MissingSubject)?;

        sub.parse::<i64>().map_err(|_| TokenError::MalformedSubject)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token has no subject")]
    MissingSubject,
    #[error("token subject is not a user id")]
    MalformedSubject,
    #[error("failed to sign token: {0}")]
    Encoding(String),
}

/// Auth service trait for access token operations
pub trait AuthService: Send + Sync {
    /// Generate an access token for a user using the configured lifetime
    fn issue_access_token(&self, user_id: i64) -> Result<String, TokenError>;

    /// Validate a token and return the user id it was issued for
    fn verify_access_token(&self, token: &str) -> Result<i64, TokenError>;
}

/// Refresh token entity
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub revoked_at: Option<OffsetDateTime>,
}

impl RefreshToken {
    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at && self.revoked_at.is_none()
    }
}

/// New refresh token for creation
#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: OffsetDateTime,
}

/// Repository trait for refresh tokens
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Create a new refresh token
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken>;

    /// Find a token by its hash, only if it is neither expired nor revoked
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>>;

    /// Mark a token revoked. Returns false when no such token exists.
    /// Revoking an already revoked token keeps its original timestamp.
    async fn revoke_by_hash(&self, token_hash: &str) -> Result<bool>;

    /// Delete expired tokens. Revoked rows are kept until they expire so a
    /// repeated revoke still finds them.
    async fn delete_expired(&self) -> Result<u64>;
}
