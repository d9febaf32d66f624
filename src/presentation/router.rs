use crate::presentation::handlers;
use crate::presentation::middleware::cors::cors_layer;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::routes;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::state::AppState;

pub fn app(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;
    let static_files = ServeDir::new(&state.config.static_dir);

    let api = Router::new()
        .route("/healthz", get(handlers::health::health_check))
        .merge(routes::auth::routes())
        .merge(routes::users::routes())
        .nest("/journals", routes::journals::routes())
        .nest("/projects", routes::projects::routes())
        .route("/tags", get(handlers::tags::search_tags));

    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .merge(routes::pages::routes())
        .nest_service("/static", static_files)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
