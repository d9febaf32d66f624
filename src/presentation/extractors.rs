use crate::domain::auth::AuthService;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

/// The credential from an `Authorization: Bearer <token>` header.
///
/// The header must split on a single space into exactly two parts, the first
/// being `Bearer` and the second non-empty.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let invalid = || AppError::Unauthorized("missing or invalid authorization header".to_string());

    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(invalid)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(invalid()),
    }
}

/// Authenticated user extractor
///
/// Runs before any body extractor, so a request without a valid access token
/// is rejected before its payload is read or the database is touched.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let user_id = state.auth_service.verify_access_token(token).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AppError::Unauthorized("invalid or expired token".to_string())
        })?;

        Ok(AuthUser { user_id })
    }
}

/// Numeric `{id}` path segment; anything else is a validation error.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationError("invalid id".to_string()))?;

        Ok(IdPath(id))
    }
}
