use crate::infrastructure::state::AppState;
use crate::presentation::handlers::pages;
use axum::{Router, routing::get};

/// Server-rendered HTML pages
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::about))
        .route("/journals", get(pages::journals))
        .route("/journals/{id}", get(pages::journal))
        .route("/projects", get(pages::projects))
        .route("/projects/{id}", get(pages::project))
        .route("/admin", get(pages::admin))
        .route("/admin/dashboard", get(pages::admin_dashboard))
        .route("/admin/journals", get(pages::admin_journals))
        .route("/admin/projects", get(pages::admin_projects))
        .route("/admin/profile", get(pages::admin_profile))
}
