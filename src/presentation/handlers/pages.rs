use crate::application::journals::get::GetJournalUseCase;
use crate::application::journals::list::ListJournalsUseCase;
use crate::application::projects::get::GetProjectUseCase;
use crate::application::projects::list::ListProjectsUseCase;
use crate::application::users::profile::{GetOwnerProfileUseCase, ProfileResponse};
use crate::infrastructure::repositories::journals::PostgresJournalRepository;
use crate::infrastructure::repositories::projects::PostgresProjectRepository;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::IdPath;
use crate::presentation::views;
use crate::shared::error::AppError;
use crate::shared::pagination::PageQuery;
use crate::shared::query::Qs;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// An error rendered as an HTML page instead of JSON
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self {
            status: err.status(),
            message: err.public_message(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(views::error_page(self.status, &self.message))).into_response()
    }
}

/// The single account's profile; a site without one yet is a server error.
async fn owner_profile(state: AppState) -> Result<ProfileResponse, PageError> {
    let use_case = GetOwnerProfileUseCase::new(Arc::new(PostgresUserRepository::new(state.pool)));

    use_case.execute().await.map_err(|e| match e {
        AppError::NotFound(_) => PageError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "No user data found".to_string(),
        },
        other => other.into(),
    })
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let profile = owner_profile(state).await?;

    Ok(Html(views::about_page(&profile)))
}

pub async fn journals(
    State(state): State<AppState>,
    query: Result<Qs<PageQuery>, AppError>,
) -> Result<Html<String>, PageError> {
    let Qs(query) = query?;
    let use_case = ListJournalsUseCase::new(Arc::new(PostgresJournalRepository::new(state.pool)));

    let list = use_case.execute(query).await?;

    Ok(Html(views::journals_page(&list, query)))
}

pub async fn journal(
    State(state): State<AppState>,
    id: Result<IdPath, AppError>,
) -> Result<Html<String>, PageError> {
    let IdPath(id) = id?;
    let use_case = GetJournalUseCase::new(Arc::new(PostgresJournalRepository::new(state.pool)));

    let (journal, neighbours) = use_case.execute_with_neighbours(id).await?;

    Ok(Html(views::journal_page(&journal, neighbours)))
}

pub async fn projects(
    State(state): State<AppState>,
    query: Result<Qs<PageQuery>, AppError>,
) -> Result<Html<String>, PageError> {
    let Qs(query) = query?;
    let use_case = ListProjectsUseCase::new(Arc::new(PostgresProjectRepository::new(state.pool)));

    let projects = use_case.execute(query).await?;

    Ok(Html(views::projects_page(&projects)))
}

pub async fn project(
    State(state): State<AppState>,
    id: Result<IdPath, AppError>,
) -> Result<Html<String>, PageError> {
    let IdPath(id) = id?;
    let use_case = GetProjectUseCase::new(Arc::new(PostgresProjectRepository::new(state.pool)));

    let (project, neighbours) = use_case.execute_with_neighbours(id).await?;

    Ok(Html(views::project_page(&project, neighbours)))
}

pub async fn admin() -> Html<String> {
    Html(views::admin_login_page())
}

pub async fn admin_dashboard() -> Html<String> {
    Html(views::admin_dashboard_page())
}

pub async fn admin_journals() -> Html<String> {
    Html(views::admin_journals_page())
}

pub async fn admin_projects() -> Html<String> {
    Html(views::admin_projects_page())
}

pub async fn admin_profile(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let profile = owner_profile(state).await?;

    Ok(Html(views::admin_profile_page(&profile)))
}
