use crate::application::users::create::{CreateUserRequest, CreateUserResponse, RegisterUserUseCase};
use crate::application::users::profile::{
    ProfileResponse, UpdateProfileRequest, UpdateProfileUseCase,
};
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Register the site owner
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = CreateUserResponse),
        (status = 400, description = "Missing name or password", body = ErrorResponse),
        (status = 403, description = "An account already exists", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = RegisterUserUseCase::new(
        Arc::new(PostgresUserRepository::new(state.pool.clone())),
        state.password_service.clone(),
    );

    let user = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the authenticated user's profile
#[utoipa::path(
    put,
    path = "/api/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateProfileUseCase::new(Arc::new(PostgresUserRepository::new(state.pool)));

    let profile = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::OK, Json(profile)))
}
