use crate::common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serial_test::serial;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
#[serial]
async fn test_search_tags_is_case_insensitive_substring() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    for name in ["rust", "Trust", "sql", "50%_off"] {
        sqlx::query("INSERT INTO tags (name) VALUES ($1)")
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app.clone().oneshot(get("/api/tags?q=RUS")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let mut values: Vec<String> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["value"].as_str().unwrap().to_string())
        .collect();
    values.sort();
    assert_eq!(values, vec!["Trust", "rust"]);
    assert!(json[0]["id"].is_i64());

    // wildcards are matched literally
    let response = app.oneshot(get("/api/tags?q=%25_")).await.unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["value"], "50%_off");

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_search_tags_without_query() {
    let pool = setup_test_db_or_skip!();

    let state = common::create_test_app_state(pool);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app.oneshot(get("/api/tags")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
