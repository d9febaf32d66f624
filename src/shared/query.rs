use crate::shared::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;

/// Query-string extractor backed by `serde_qs` whose rejection is an [`AppError`],
/// so a bad `?limit=abc` produces the usual JSON error payload.
pub struct Qs<T>(pub T);

impl<T, S> FromRequestParts<S> for Qs<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or("");
        serde_qs::from_str::<T>(query).map(Qs).map_err(|e| {
            tracing::warn!("Failed to parse query string: {}", e);
            AppError::ValidationError(format!("invalid query parameters: {}", e))
        })
    }
}
