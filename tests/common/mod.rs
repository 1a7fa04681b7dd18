#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use polling_app::{build_app, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub fn test_app() -> Router {
    build_app(AppState::in_memory(SECRET)).expect("build app")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("call app");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post(app: &Router, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
    send(app, Method::POST, uri, token, Some(body)).await
}

/// Signs up and logs in `email`, returning the issued token.
pub async fn login_as(app: &Router, email: &str) -> String {
    let credentials = json!({ "email": email, "password": "abcdef" });
    let signup = post(app, "/api/users/signup", None, credentials.clone()).await;
    assert_eq!(signup.status, StatusCode::OK, "signup failed: {}", signup.body);

    let login = post(app, "/api/users/login", None, credentials).await;
    assert_eq!(login.status, StatusCode::OK, "login failed: {}", login.body);

    login
        .headers
        .get("x-auth-token")
        .and_then(|value| value.to_str().ok())
        .expect("x-auth-token header")
        .to_string()
}

pub fn mock_poll(question: &str, labels: &[&str]) -> Value {
    json!({
        "question": question,
        "choices": labels.iter().map(|label| json!({ "label": label })).collect::<Vec<_>>(),
    })
}

pub async fn create_poll(app: &Router, token: &str, poll: Value) -> Value {
    let response = post(app, "/api/polls", Some(token), poll).await;
    assert_eq!(response.status, StatusCode::OK, "create poll failed: {}", response.body);
    response.body
}
