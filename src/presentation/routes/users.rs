use crate::infrastructure::state::AppState;
use crate::presentation::handlers::users;
use axum::{
    Router,
    routing::{post, put},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/me", put(users::update_profile))
}
