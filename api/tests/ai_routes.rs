mod common;

use axum::http::StatusCode;
use common::app;
use serde_json::{Value, json};
use tempfile::TempDir;

const WORKOUT_PROMPT: &str = "You are a home-workout assistant.
User: \"push-ups\"
Constraints: \"None\"
Return:
- 3 substitutions OR regressions
- 1 progression
- reps/time for each
- 1 safety note
Bullet points only. Short.";

#[tokio::test]
async fn test_proxies_prompt_and_trims_output() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("POST", "/responses")
        .match_header("authorization", "Bearer sk-test")
        .match_body(mockito::Matcher::Json(json!({
            "model": "gpt-5-mini",
            "input": [{
                "role": "user",
                "content": [{ "type": "input_text", "text": WORKOUT_PROMPT }]
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"output_text": "\n- Incline push-ups 3x10\n"}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let server = app(upstream.url(), &dir);

    let response = server
        .post("/ai")
        .json(&json!({ "mode": "workout", "input": "push-ups" }))
        .await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "output": "- Incline push-ups 3x10" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_prefix_is_served_too() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/responses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"output_text": "- Greek yoghurt"}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let server = app(upstream.url(), &dir);

    let response = server
        .post("/api/ai")
        .json(&json!({ "mode": "food", "input": "ice cream", "constraints": "" }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["output"], "- Greek yoghurt");
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let dir = TempDir::new().unwrap();
    let server = app(common::UNUSED_UPSTREAM.to_string(), &dir);

    for body in [
        json!({ "mode": "workout" }),
        json!({ "input": "squats" }),
        json!({ "mode": "", "input": "squats" }),
        json!({}),
    ] {
        let response = server.post("/ai").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Missing mode or input" }));
    }

    let response = server.post("/ai").text("not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing mode or input" }));
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    let server = app(common::UNUSED_UPSTREAM.to_string(), &dir);

    let response = server
        .post("/ai")
        .json(&json!({ "mode": "sleep", "input": "naps" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Unsupported mode: sleep" }));
}

#[tokio::test]
async fn test_other_methods_get_405() {
    let dir = TempDir::new().unwrap();
    let server = app(common::UNUSED_UPSTREAM.to_string(), &dir);

    let response = server.get("/ai").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({ "error": "Use POST" }));

    let response = server.put("/api/ai").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_upstream_failure_is_500_with_message() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/responses")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let server = app(upstream.url(), &dir);

    let response = server
        .post("/ai")
        .json(&json!({ "mode": "food", "input": "chips" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Incorrect API key provided" }));
}

#[tokio::test]
async fn test_health_and_openapi() {
    let dir = TempDir::new().unwrap();
    let server = app(common::UNUSED_UPSTREAM.to_string(), &dir);

    let health = server.get("/health").await;
    health.assert_status(StatusCode::OK);
    assert_eq!(health.json::<Value>()["status"], "ok");

    let docs = server.get("/api-docs/openapi.json").await;
    docs.assert_status(StatusCode::OK);
    let paths = &docs.json::<Value>()["paths"];
    assert!(paths.get("/ai").is_some());
    assert!(paths.get("/health").is_some());
    assert!(paths.get("/tracker/logs").is_some());
}
