use crate::common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

fn login_request(name: &str, password: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/login")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": name, "password": password }).to_string(),
        ))
        .unwrap()
}

fn bearer_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(login_request(common::TEST_USER, common::TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    common::body_json(response).await
}

#[tokio::test]
#[serial]
async fn test_login_success() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let json = login(&app).await;

    assert_eq!(json["id"], user_id);
    assert_eq!(json["name"], common::TEST_USER);
    assert!(json["token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["created_at"].is_string());
    assert_eq!(common::count(&pool, "refresh_tokens").await, 1);

    // only the hash is stored
    let stored: String = sqlx::query_scalar("SELECT token_hash FROM refresh_tokens")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, json["refresh_token"].as_str().unwrap());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_login_failures_are_indistinguishable() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let unknown = app
        .clone()
        .oneshot(login_request("nobody", common::TEST_PASSWORD))
        .await
        .unwrap();
    let wrong = app
        .clone()
        .oneshot(login_request(common::TEST_USER, "wrongpassword"))
        .await
        .unwrap();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(unknown).await,
        common::body_json(wrong).await
    );
    assert_eq!(common::count(&pool, "refresh_tokens").await, 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_login_missing_fields() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(login_request("", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_refresh_and_revoke_flow() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let user_id = common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state.clone()).unwrap();

    let session = login(&app).await;
    let refresh_token = session["refresh_token"].as_str().unwrap();

    let refreshed = app
        .clone()
        .oneshot(bearer_request("/api/refresh", refresh_token))
        .await
        .unwrap();
    assert_eq!(refreshed.status(), StatusCode::OK);
    let json = common::body_json(refreshed).await;
    let token = json["token"].as_str().unwrap();
    assert_eq!(
        my_journal::domain::auth::AuthService::verify_access_token(
            state.auth_service.as_ref(),
            token
        )
        .unwrap(),
        user_id
    );

    let revoked = app
        .clone()
        .oneshot(bearer_request("/api/revoke", refresh_token))
        .await
        .unwrap();
    assert_eq!(revoked.status(), StatusCode::NO_CONTENT);

    let after = app
        .clone()
        .oneshot(bearer_request("/api/refresh", refresh_token))
        .await
        .unwrap();
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);

    // revoking an already revoked token still succeeds
    let again = app
        .clone()
        .oneshot(bearer_request("/api/revoke", refresh_token))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NO_CONTENT);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_refresh_with_unknown_token() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .clone()
        .oneshot(bearer_request("/api/refresh", "not-a-real-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(bearer_request("/api/revoke", "not-a-real-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_expired_refresh_token_is_rejected() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    common::create_user(&pool, common::TEST_USER, common::TEST_PASSWORD).await;

    let state = common::create_test_app_state(pool.clone());
    let app = my_journal::presentation::router::app(state).unwrap();

    let session = login(&app).await;
    sqlx::query("UPDATE refresh_tokens SET expires_at = NOW() - INTERVAL '1 minute'")
        .execute(&pool)
        .await
        .unwrap();

    let response = app
        .oneshot(bearer_request(
            "/api/refresh",
            session["refresh_token"].as_str().unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_refresh_without_header() {
    let pool = setup_test_db_or_skip!();

    let state = common::create_test_app_state(pool);
    let app = my_journal::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/refresh")
                .method("POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
