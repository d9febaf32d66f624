use crate::application::tags::search::{SearchTagsUseCase, TagSearchQuery, TagSuggestion};
use crate::infrastructure::repositories::tags::PostgresTagRepository;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Search tags by name
#[utoipa::path(
    get,
    path = "/api/tags",
    params(TagSearchQuery),
    responses(
        (status = 200, description = "Matching tags", body = [TagSuggestion]),
        (status = 400, description = "Missing search query", body = ErrorResponse)
    ),
    tag = "tags"
)]
pub async fn search_tags(
    State(state): State<AppState>,
    Qs(query): Qs<TagSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SearchTagsUseCase::new(Arc::new(PostgresTagRepository::new(state.pool)));

    let tags = use_case.execute(query).await?;

    Ok((StatusCode::OK, Json(tags)))
}
