//! End-to-end checks of the HTTP surface against scripted models.

use askgate_llm::{MockModel, ModelHandle};
use askgate_server::{build_router, AppState, ServerConfig};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app(model: ModelHandle) -> Router {
    build_router(AppState::new(model), &ServerConfig::default())
}

fn ask_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_returns_exact_body() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(ModelHandle::unavailable("no key")), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn ask_relays_model_answer() {
    let model = Arc::new(MockModel::replying("A"));
    let router = app(ModelHandle::ready(model.clone()));

    let (status, body) = send(router, ask_request(r#"{"question":"Q"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "A" }));
    assert_eq!(model.last_prompt().as_deref(), Some("Q"));
}

#[tokio::test]
async fn ask_forwards_question_verbatim() {
    let model = Arc::new(MockModel::replying("ok"));
    let router = app(ModelHandle::ready(model.clone()));
    let question = "  Qual a cor do céu?\n<b>sem</b> sanitização  ";

    let (status, _) = send(
        router,
        ask_request(json!({ "question": question }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(model.last_prompt().as_deref(), Some(question));
}

#[tokio::test]
async fn ask_accepts_question_over_two_megabytes() {
    let model = Arc::new(MockModel::replying("long"));
    let router = app(ModelHandle::ready(model.clone()));
    let question = "a".repeat(3 * 1024 * 1024);

    let (status, body) = send(
        router,
        ask_request(json!({ "question": question }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "long" }));
    assert_eq!(model.calls(), 1);
    assert_eq!(model.last_prompt().map(|p| p.len()), Some(question.len()));
}

#[tokio::test]
async fn ask_over_configured_limit_is_payload_too_large() {
    let model = Arc::new(MockModel::replying("unused"));
    let router = build_router(
        AppState::new(ModelHandle::ready(model.clone())),
        &ServerConfig::default().with_max_body_bytes(1024),
    );
    let question = "a".repeat(4096);

    let (status, body) = send(
        router,
        ask_request(json!({ "question": question }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!body["error"].as_str().unwrap().contains("'question'"));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn ask_with_null_question_is_bad_request() {
    let router = app(ModelHandle::ready(Arc::new(MockModel::replying("A"))));

    let (status, _) = send(router, ask_request(r#"{"question":null}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ask_forwards_empty_question() {
    let model = Arc::new(MockModel::replying("A"));
    let router = app(ModelHandle::ready(model.clone()));

    let (status, _) = send(router, ask_request(r#"{"question":""}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(model.last_prompt().as_deref(), Some(""));
}

#[tokio::test]
async fn ask_without_question_is_bad_request() {
    let model = Arc::new(MockModel::replying("unused"));
    let router = app(ModelHandle::ready(model.clone()));

    let (status, body) = send(router, ask_request(r#"{"prompt":"wrong key"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Invalid request. 'question' not found in JSON." })
    );
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn ask_with_unusable_body_is_bad_request() {
    let bodies = ["", "not json", "[1, 2]", r#"{"question": 42}"#];

    for raw in bodies {
        let router = app(ModelHandle::ready(Arc::new(MockModel::replying("A"))));
        let (status, body) = send(router, ask_request(raw)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw:?}");
        assert!(body["error"].as_str().unwrap().contains("'question'"));
    }
}

#[tokio::test]
async fn ask_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/ask")
        .body(Body::from(r#"{"question":"Q"}"#))
        .unwrap();

    let router = app(ModelHandle::ready(Arc::new(MockModel::replying("A"))));
    let (status, _) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ask_without_model_is_internal_error() {
    let (status, body) = send(
        app(ModelHandle::unavailable("GOOGLE_API_KEY is not set")),
        ask_request(r#"{"question":"Is there a model?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("model was not initialized"));
    assert!(body.get("answer").is_none());
}

#[tokio::test]
async fn missing_model_is_reported_before_bad_body() {
    let (status, _) = send(
        app(ModelHandle::unavailable("no key")),
        ask_request(r#"{"prompt":"wrong key"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn upstream_failure_is_service_unavailable() {
    let router = app(ModelHandle::ready(Arc::new(MockModel::failing("X"))));

    let (status, body) = send(router, ask_request(r#"{"question":"This will fail"}"#)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error processing request:"));
    assert!(error.contains("X"));
    assert!(body.get("answer").is_none());
}

#[tokio::test]
async fn repeated_asks_are_identical() {
    let model = Arc::new(MockModel::replying("same"));
    let router = app(ModelHandle::ready(model.clone()));

    let first = send(router.clone(), ask_request(r#"{"question":"Q"}"#)).await;
    let second = send(router.clone(), ask_request(r#"{"question":"Q"}"#)).await;
    let third = send(router, ask_request(r#"{"question":"Q"}"#)).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(model.calls(), 3);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();

    let response = app(ModelHandle::unavailable("no key"))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
