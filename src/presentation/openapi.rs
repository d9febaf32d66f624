use crate::application::auth::login::{LoginRequest, LoginResponse};
use crate::application::auth::refresh::RefreshResponse;
use crate::application::journals::create::{CreateJournalRequest, CreateJournalResponse};
use crate::application::journals::get::JournalResponse;
use crate::application::journals::list::JournalListResponse;
use crate::application::journals::update::{MessageResponse, UpdateJournalRequest};
use crate::application::projects::create::{
    CreateProjectRequest, SavedProjectResponse, TagInput, TagResponse,
};
use crate::application::projects::get::ProjectResponse;
use crate::application::projects::update::UpdateProjectRequest;
use crate::application::tags::search::TagSuggestion;
use crate::application::users::create::{CreateUserRequest, CreateUserResponse};
use crate::application::users::profile::{ProfileResponse, UpdateProfileRequest};
use crate::presentation::handlers::health::HealthResponse;
use crate::shared::error::ErrorResponse;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "my-journal API",
        version = "0.1.0",
        description = "Personal journal and portfolio backend.\n\nMutating endpoints take an access token from `/api/login` as `Authorization: Bearer <token>`."
    ),
    paths(
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::refresh,
        crate::presentation::handlers::auth::revoke,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::update_profile,
        crate::presentation::handlers::journals::list_journals,
        crate::presentation::handlers::journals::get_journal,
        crate::presentation::handlers::journals::create_journal,
        crate::presentation::handlers::journals::update_journal,
        crate::presentation::handlers::journals::delete_journal,
        crate::presentation::handlers::projects::list_projects,
        crate::presentation::handlers::projects::get_project,
        crate::presentation::handlers::projects::create_project,
        crate::presentation::handlers::projects::update_project,
        crate::presentation::handlers::projects::delete_project,
        crate::presentation::handlers::tags::search_tags,
        crate::presentation::handlers::health::health_check,
    ),
    components(
        schemas(
            // Requests
            LoginRequest,
            CreateUserRequest,
            UpdateProfileRequest,
            CreateJournalRequest,
            UpdateJournalRequest,
            CreateProjectRequest,
            UpdateProjectRequest,
            TagInput,

            // Responses
            LoginResponse,
            RefreshResponse,
            CreateUserResponse,
            ProfileResponse,
            JournalResponse,
            JournalListResponse,
            CreateJournalResponse,
            MessageResponse,
            ProjectResponse,
            SavedProjectResponse,
            TagResponse,
            TagSuggestion,
            HealthResponse,

            ErrorResponse,
        )
    ),
    tags(
        (name = "auth", description = "Login, token refresh and logout"),
        (name = "users", description = "Owner account and profile"),
        (name = "journals", description = "Journal entries"),
        (name = "projects", description = "Portfolio projects and their tags"),
        (name = "tags", description = "Tag search"),
        (name = "health", description = "Liveness")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "refresh_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
