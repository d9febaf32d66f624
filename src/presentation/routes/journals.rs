use crate::infrastructure::state::AppState;
use crate::presentation::handlers::journals;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(journals::list_journals)
                .post(journals::create_journal)
                .put(journals::update_journal),
        )
        .route(
            "/{id}",
            get(journals::get_journal).delete(journals::delete_journal),
        )
}
