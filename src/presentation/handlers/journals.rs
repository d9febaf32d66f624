use crate::application::journals::create::{
    CreateJournalRequest, CreateJournalResponse, CreateJournalUseCase,
};
use crate::application::journals::delete::DeleteJournalUseCase;
use crate::application::journals::get::{GetJournalUseCase, JournalResponse};
use crate::application::journals::list::{JournalListResponse, ListJournalsUseCase};
use crate::application::journals::update::{
    MessageResponse, UpdateJournalRequest, UpdateJournalUseCase,
};
use crate::infrastructure::repositories::journals::PostgresJournalRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::{AuthUser, IdPath};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::pagination::PageQuery;
use crate::shared::query::Qs;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

fn repo(state: &AppState) -> Arc<PostgresJournalRepository> {
    Arc::new(PostgresJournalRepository::new(state.pool.clone()))
}

/// List journal entries, newest first
#[utoipa::path(
    get,
    path = "/api/journals",
    params(PageQuery),
    responses(
        (status = 200, description = "A page of journal entries", body = JournalListResponse),
        (status = 400, description = "Invalid limit or offset", body = ErrorResponse)
    ),
    tag = "journals"
)]
pub async fn list_journals(
    State(state): State<AppState>,
    Qs(query): Qs<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListJournalsUseCase::new(repo(&state));

    let response = use_case.execute(query).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get a journal entry by id
#[utoipa::path(
    get,
    path = "/api/journals/{id}",
    params(("id" = i64, Path, description = "Journal id")),
    responses(
        (status = 200, description = "Journal entry", body = JournalResponse),
        (status = 404, description = "Journal not found", body = ErrorResponse)
    ),
    tag = "journals"
)]
pub async fn get_journal(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetJournalUseCase::new(repo(&state));

    let journal = use_case.execute(id).await?;

    Ok((StatusCode::OK, Json(journal)))
}

/// Create a journal entry
#[utoipa::path(
    post,
    path = "/api/journals",
    request_body = CreateJournalRequest,
    responses(
        (status = 201, description = "Journal created", body = CreateJournalResponse),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "journals"
)]
pub async fn create_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateJournalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateJournalUseCase::new(repo(&state));

    let journal = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(journal)))
}

/// Update a journal entry
#[utoipa::path(
    put,
    path = "/api/journals",
    request_body = UpdateJournalRequest,
    responses(
        (status = 200, description = "Journal updated", body = MessageResponse),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Journal not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "journals"
)]
pub async fn update_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateJournalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateJournalUseCase::new(repo(&state));

    let response = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a journal entry
#[utoipa::path(
    delete,
    path = "/api/journals/{id}",
    params(("id" = i64, Path, description = "Journal id")),
    responses(
        (status = 204, description = "Journal deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Journal not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "journals"
)]
pub async fn delete_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteJournalUseCase::new(repo(&state));

    use_case.execute(auth.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
