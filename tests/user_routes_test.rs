//! Router-level tests for /api/users

mod common;

use axum::http::StatusCode;
use common::*;
use polling_app::utils::session;
use serde_json::json;

#[tokio::test]
async fn signup_returns_public_user_record() {
    let app = test_app();

    let response = post(
        &app,
        "/api/users/signup",
        None,
        json!({ "email": "jack@test.com", "password": "abcdef" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "jack@test.com");
    assert!(response.body["_id"].is_string());
    assert!(response.body.get("passwordHash").is_none());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn duplicate_signup_is_a_conflict() {
    let app = test_app();
    let credentials = json!({ "email": "jack@test.com", "password": "abcdef" });

    post(&app, "/api/users/signup", None, credentials.clone()).await;
    let again = post(&app, "/api/users/signup", None, credentials).await;

    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.body["error"], "CONFLICT");
}

#[tokio::test]
async fn signup_validates_credentials() {
    let app = test_app();

    let bad_email = post(&app, "/api/users/signup", None, json!({ "email": "jack", "password": "abcdef" })).await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = post(&app, "/api/users/signup", None, json!({ "email": "jack@test.com", "password": "abc" })).await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);

    let missing_password = post(&app, "/api/users/signup", None, json!({ "email": "jack@test.com" })).await;
    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_sets_auth_token_header() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let claims = session::verify_token(&token, SECRET).expect("valid token");
    assert_eq!(claims.sub.len(), 24);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = test_app();
    login_as(&app, "jack@test.com").await;

    let response = post(
        &app,
        "/api/users/login",
        None,
        json!({ "email": "jack@test.com", "password": "wrong-password" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.headers.get("x-auth-token").is_none());
}

#[tokio::test]
async fn short_or_malformed_login_credentials_are_unauthorized() {
    let app = test_app();
    login_as(&app, "jack@test.com").await;

    for body in [
        json!({ "email": "jack@test.com", "password": "x" }),
        json!({ "email": "jack", "password": "abcdef" }),
    ] {
        let response = post(&app, "/api/users/login", None, body).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "AUTHENTICATION_ERROR");
        assert!(response.headers.get("x-auth-token").is_none());
    }
}
