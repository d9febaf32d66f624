use crate::application::projects::create::{
    CreateProjectRequest, CreateProjectUseCase, SavedProjectResponse,
};
use crate::application::projects::delete::DeleteProjectUseCase;
use crate::application::projects::get::{GetProjectUseCase, ProjectResponse};
use crate::application::projects::list::ListProjectsUseCase;
use crate::application::projects::update::{UpdateProjectRequest, UpdateProjectUseCase};
use crate::infrastructure::repositories::projects::PostgresProjectRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::{AuthUser, IdPath};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::pagination::PageQuery;
use crate::shared::query::Qs;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

fn repo(state: &AppState) -> Arc<PostgresProjectRepository> {
    Arc::new(PostgresProjectRepository::new(state.pool.clone()))
}

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    params(PageQuery),
    responses(
        (status = 200, description = "Projects with their tag names", body = [ProjectResponse]),
        (status = 400, description = "Invalid limit or offset", body = ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Qs(query): Qs<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListProjectsUseCase::new(repo(&state));

    let projects = use_case.execute(query).await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetProjectUseCase::new(repo(&state));

    let project = use_case.execute(id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Create a project and link its tags in one transaction
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = SavedProjectResponse),
        (status = 400, description = "Missing field, bad status or invalid tag", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Nothing was written", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateProjectUseCase::new(repo(&state));

    let project = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project, optionally replacing its tags
#[utoipa::path(
    put,
    path = "/api/projects",
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = SavedProjectResponse),
        (status = 400, description = "Missing field, bad status or invalid tag", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateProjectUseCase::new(repo(&state));

    let project = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteProjectUseCase::new(repo(&state));

    use_case.execute(auth.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
