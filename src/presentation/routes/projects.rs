use crate::infrastructure::state::AppState;
use crate::presentation::handlers::projects;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects)
                .post(projects::create_project)
                .put(projects::update_project),
        )
        .route(
            "/{id}",
            get(projects::get_project).delete(projects::delete_project),
        )
}
