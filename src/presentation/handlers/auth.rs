use crate::application::auth::login::{LoginRequest, LoginResponse, LoginUseCase};
use crate::application::auth::refresh::{RefreshResponse, RefreshUseCase};
use crate::application::auth::refresh_tokens::RefreshTokenStore;
use crate::application::auth::revoke::RevokeUseCase;
use crate::infrastructure::repositories::refresh_tokens::PostgresRefreshTokenRepository;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::bearer_token;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

fn refresh_token_store(state: &AppState) -> RefreshTokenStore {
    RefreshTokenStore::new(
        Arc::new(PostgresRefreshTokenRepository::new(state.pool.clone())),
        state.config.refresh_token_ttl(),
    )
}

/// Login handler
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing name or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = LoginUseCase::new(
        Arc::new(PostgresUserRepository::new(state.pool.clone())),
        state.auth_service.clone(),
        state.password_service.clone(),
        refresh_token_store(&state),
    );

    let response = use_case.execute(req).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 401, description = "Missing, unknown, expired or revoked refresh token", body = ErrorResponse)
    ),
    security(("refresh_token" = [])),
    tag = "auth"
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = bearer_token(&headers)?;
    let use_case = RefreshUseCase::new(refresh_token_store(&state), state.auth_service.clone());

    let response = use_case.execute(token).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Revoke a refresh token (logout)
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Missing or unknown refresh token", body = ErrorResponse)
    ),
    security(("refresh_token" = [])),
    tag = "auth"
)]
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = bearer_token(&headers)?;
    let use_case = RevokeUseCase::new(refresh_token_store(&state));

    use_case.execute(token).await?;

    Ok(StatusCode::NO_CONTENT)
}
