//! Router-level tests for /api/polls

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};

fn labels(poll: &Value) -> Vec<String> {
    poll["choices"]
        .as_array()
        .expect("choices")
        .iter()
        .map(|choice| choice["label"].as_str().expect("label").to_string())
        .collect()
}

fn choice_id(poll: &Value, index: usize) -> String {
    poll["choices"][index]["_id"].as_str().expect("choice id").to_string()
}

#[tokio::test]
async fn post_poll_returns_poll_with_generated_ids() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let created = create_poll(&app, &token, mock_poll("Best pet?", &["Cats", "Dogs", "Birds"])).await;

    assert!(created["_id"].is_string());
    assert_eq!(created["question"], "Best pet?");
    assert_eq!(labels(&created), ["Cats", "Dogs", "Birds"]);
    for choice in created["choices"].as_array().unwrap() {
        assert_eq!(choice["_id"].as_str().unwrap().len(), 24);
    }
    assert!(created["author"].is_string());
    assert!(created["createdAt"].is_string());
}

#[tokio::test]
async fn get_polls_lists_every_created_poll() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let mut created = Vec::new();
    for n in 0..5 {
        let question = format!("Question {n}");
        created.push(create_poll(&app, &token, mock_poll(&question, &["yes", "no"])).await);
    }

    let response = get(&app, "/api/polls").await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = response.body.as_array().expect("array of polls");
    assert_eq!(listed.len(), created.len());
    for poll in &created {
        assert!(listed.contains(poll), "missing poll {}", poll);
    }
}

#[tokio::test]
async fn get_poll_by_id_equals_creation_response() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;
    let created = create_poll(&app, &token, mock_poll("Tabs or spaces?", &["Tabs", "Spaces"])).await;

    let response = get(&app, &format!("/api/polls/{}", created["_id"].as_str().unwrap())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created);
}

#[tokio::test]
async fn unknown_poll_is_404() {
    let app = test_app();

    let response = get(&app, "/api/polls/64b7f0c2a1b2c3d4e5f60718").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let malformed = get(&app, "/api/polls/not-an-id/results").await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn poll_without_choices_is_rejected() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let empty = post(&app, "/api/polls", Some(&token), json!({ "question": "?", "choices": [] })).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], "VALIDATION_ERROR");

    let missing = post(&app, "/api/polls", Some(&token), json!({ "question": "?" })).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let blank = post(&app, "/api/polls", Some(&token), mock_poll("?", &["ok", " "])).await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    assert_eq!(get(&app, "/api/polls").await.body, json!([]));
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let response = post(&app, "/api/polls", Some(&token), json!({ "choices": "Cats" })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn post_vote_returns_created_vote() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;
    let poll = create_poll(&app, &token, mock_poll("Lunch?", &["Pizza", "Tacos", "Soup", "Salad"])).await;
    let poll_id = poll["_id"].as_str().unwrap();

    let vote = json!({ "poll": poll_id, "selection": choice_id(&poll, 2) });
    let response = post(&app, &format!("/api/polls/{poll_id}/votes"), Some(&token), vote.clone()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["poll"], vote["poll"]);
    assert_eq!(response.body["selection"], vote["selection"]);
    assert!(response.body["_id"].is_string());
    assert!(response.body["voter"].is_string());
}

#[tokio::test]
async fn vote_for_choice_of_another_poll_is_rejected() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;
    let poll = create_poll(&app, &token, mock_poll("A?", &["a1", "a2"])).await;
    let other = create_poll(&app, &token, mock_poll("B?", &["b1", "b2"])).await;
    let poll_id = poll["_id"].as_str().unwrap();

    let response = post(
        &app,
        &format!("/api/polls/{poll_id}/votes"),
        Some(&token),
        json!({ "poll": poll_id, "selection": choice_id(&other, 0) }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn vote_on_unknown_poll_is_404() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;

    let response = post(
        &app,
        "/api/polls/64b7f0c2a1b2c3d4e5f60718/votes",
        Some(&token),
        json!({ "selection": "64b7f0c2a1b2c3d4e5f60719" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_require_bearer_token() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;
    let poll = create_poll(&app, &token, mock_poll("Auth?", &["yes"])).await;
    let poll_id = poll["_id"].as_str().unwrap();
    let vote = json!({ "selection": choice_id(&poll, 0) });

    let no_token = post(&app, "/api/polls", None, mock_poll("x", &["y"])).await;
    assert_eq!(no_token.status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_token.body["error"], "AUTHENTICATION_ERROR");

    let bad_token = post(&app, "/api/polls", Some("not.a.token"), mock_poll("x", &["y"])).await;
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);

    let vote_without_token = post(&app, &format!("/api/polls/{poll_id}/votes"), None, vote).await;
    assert_eq!(vote_without_token.status, StatusCode::UNAUTHORIZED);

    let results = get(&app, &format!("/api/polls/{poll_id}/results")).await;
    assert_eq!(results.body, json!([]));
}

#[tokio::test]
async fn results_count_votes_per_choice() {
    let app = test_app();
    let token = login_as(&app, "jack@test.com").await;
    let poll = create_poll(&app, &token, mock_poll("Best pet?", &["Cats", "Dogs", "Birds"])).await;
    let poll_id = poll["_id"].as_str().unwrap();
    let (cats, dogs, birds) = (choice_id(&poll, 0), choice_id(&poll, 1), choice_id(&poll, 2));

    for selection in [&dogs, &cats, &dogs, &dogs, &cats] {
        let response = post(
            &app,
            &format!("/api/polls/{poll_id}/votes"),
            Some(&token),
            json!({ "poll": poll_id, "selection": selection }),
        )
        .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = get(&app, &format!("/api/polls/{poll_id}/results")).await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body.as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert!(results.contains(&json!({ "_id": dogs, "count": 3 })));
    assert!(results.contains(&json!({ "_id": cats, "count": 2 })));
    assert!(results.iter().all(|entry| entry["_id"] != json!(birds)));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
