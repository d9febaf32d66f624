use crate::common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

fn json_request(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn project_body(tags: serde_json::Value) -> serde_json::Value {
    json!({
        "title": "my-journal",
        "description": "<p>A journal</p>",
        "link": "https://example.com",
        "github": "https://github.com/example/my-journal",
        "tags": tags
    })
}

async fn insert_tag(pool: &sqlx::PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tags (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[serial]
async fn test_create_project_with_existing_and_new_tag() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;
    let rust_id = insert_tag(&pool, "rust").await;

    let state = common::create_test_app_state(pool.clone());
    let token = common::access_token(&state, user_id);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &token,
            project_body(json!([{ "id": rust_id }, { "name": "axum" }])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["tags"].as_array().unwrap().len(), 2);

    assert_eq!(common::count(&pool, "tags").await, 2);
    assert_eq!(common::count(&pool, "project_tags").await, 2);

    // the read view lists tag names alphabetically
    let id = json["id"].as_i64().unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/projects/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["tags"], json!(["axum", "rust"]));

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_unknown_tag_id_leaves_nothing_behind() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let token = common::access_token(&state, user_id);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &token,
            project_body(json!([{ "name": "fresh" }, { "id": 9999 }])),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(common::count(&pool, "projects").await, 0);
    assert_eq!(common::count(&pool, "tags").await, 0);
    assert_eq!(common::count(&pool, "project_tags").await, 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_create_project_missing_fields() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let token = common::access_token(&state, user_id);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &token,
            json!({ "title": "t", "description": "", "link": "", "github": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count(&pool, "projects").await, 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_update_replaces_tags_and_delete_removes_links() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let token = common::access_token(&state, user_id);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &token,
            project_body(json!([{ "name": "rust" }, { "name": "sql" }])),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = common::body_json(response).await["id"].as_i64().unwrap();

    let mut body = project_body(json!([{ "name": "web" }]));
    body["id"] = json!(id);
    body["status"] = json!("archived");
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/projects", &token, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "archived");
    assert_eq!(json["tags"][0]["name"], "web");
    assert_eq!(common::count(&pool, "project_tags").await, 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/projects/{}", id))
                .method("DELETE")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(common::count(&pool, "project_tags").await, 0);
    // tags outlive the projects that used them
    assert_eq!(common::count(&pool, "tags").await, 3);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_list_projects() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let token = common::access_token(&state, user_id);
    let app = my_journal::presentation::router::app(state).unwrap();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/projects",
                &token,
                project_body(json!([])),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["tags"], json!([]));

    common::cleanup_test_db(&pool).await;
}
