use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use my_journal::infrastructure::state::AppState;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use crate::common;

// Liveness never touches the database, so a lazy pool is enough.
fn lazy_state() -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy(&common::test_database_url())
        .unwrap();
    AppState::new(pool, common::test_config())
}

#[tokio::test]
async fn test_health_check() {
    let app = my_journal::presentation::router::app(lazy_state()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "my-journal");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = my_journal::presentation::router::app(lazy_state()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert!(json["paths"]["/api/journals"].is_object());
}
