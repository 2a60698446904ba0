//! HTTP Transport Integration Tests
//!
//! HttpDraftingEngine をローカルの axum サーバーに対して検証する

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use lfd_client::adapter::http::client::HttpDraftingEngine;
use lfd_client::application::dto::session_config::SessionConfig;
use lfd_client::application::session_controller::{ActionOutcome, SessionController};
use lfd_client::domain::entities::clarification::NextAction;
use lfd_client::domain::entities::log_frame::LogFrame;
use lfd_client::domain::errors::TransportError;
use lfd_client::domain::repositories::drafting_engine::{DraftingEngine, RefineRequest};

type Captured = Arc<Mutex<Vec<(String, Value)>>>;

fn draft_response(questions: Value, next_action: &str) -> Value {
    json!({
        "preprocess": {
            "raw_input_id": "RAW-0f1c",
            "normalized_input": "We want to reduce onboarding time",
            "intent": "create",
            "entities": { "goals": [], "measure_keywords": ["reduce"], "org_terms": ["team"] }
        },
        "drafting": {
            "draft_lfo": {
                "goal": "Faster onboarding for new engineers",
                "purpose": "New engineers ship code within their first month",
                "outcomes": ["Onboarding guide published", "Buddy program running"],
                "inputs": ["Mentor hours", "Documentation time"],
                "user_answers": null
            },
            "confidence": 0.58,
            "open_questions": ["What is the target timeframe?"],
            "mapping": { "outcomes_support": {}, "inputs_support": {} }
        },
        "clarification": {
            "question_set": questions,
            "stop_condition": [],
            "next_action": next_action
        }
    })
}

async fn draft_handler(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    captured.lock().unwrap().push(("/draft".to_string(), body));
    Json(draft_response(
        json!([{ "id": "q1", "question": "What is the target timeframe?", "required": true }]),
        "wait_for_user",
    ))
}

async fn refine_handler(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    captured.lock().unwrap().push(("/refine".to_string(), body));
    Json(draft_response(json!([]), "proceed_with_assumptions"))
}

async fn failing_handler() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "engine exploded: Invalid LLM JSON")
}

async fn malformed_handler() -> Json<Value> {
    Json(json!({ "unexpected": true }))
}

/// ローカルサーバーを起動してベースアドレスを返す
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_engine_server() -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/draft", post(draft_handler))
        .route("/refine", post(refine_handler))
        .with_state(captured.clone());
    (spawn_server(app).await, captured)
}

#[tokio::test]
async fn test_draft_sends_text_and_decodes_result() {
    let (base, captured) = spawn_engine_server().await;
    let engine = HttpDraftingEngine::new(base);

    let result = engine.draft("We want to reduce onboarding time").await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].0, "/draft");
    assert_eq!(captured[0].1, json!({ "text": "We want to reduce onboarding time" }));

    assert_eq!(result.clarification.next_action, NextAction::WaitForUser);
    assert_eq!(result.clarification.question_set[0].id, "q1");
    assert!(result.clarification.question_set[0].required);
    assert_eq!(result.drafting.draft_lfo.outcomes.len(), 2);
    assert_eq!(result.preprocess["intent"], "create");
}

#[tokio::test]
async fn test_trailing_slash_base_address() {
    let (base, captured) = spawn_engine_server().await;
    let engine = HttpDraftingEngine::new(format!("{}/", base));

    engine.draft("text").await.unwrap();

    assert_eq!(captured.lock().unwrap()[0].0, "/draft");
}

#[tokio::test]
async fn test_non_success_status_carries_status_and_body() {
    let app = Router::new()
        .route("/draft", post(failing_handler))
        .route("/refine", post(failing_handler));
    let engine = HttpDraftingEngine::new(spawn_server(app).await);

    let err = engine.draft("text").await.unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 500,
            body: "engine exploded: Invalid LLM JSON".to_string(),
        }
    );
}

#[tokio::test]
async fn test_missing_route_is_status_error() {
    let app = Router::new().route("/draft", post(malformed_handler));
    let engine = HttpDraftingEngine::new(spawn_server(app).await);

    let request = RefineRequest {
        raw_text: "text".to_string(),
        draft_lfo: LogFrame {
            goal: "g".to_string(),
            purpose: "p".to_string(),
            outcomes: vec![],
            inputs: vec![],
            user_answers: None,
            extra: Default::default(),
        },
        question_set: vec![],
        answers: BTreeMap::new(),
        policy: None,
    };
    let err = engine.refine(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let app = Router::new().route("/draft", post(malformed_handler));
    let engine = HttpDraftingEngine::new(spawn_server(app).await);

    let err = engine.draft("text").await.unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn test_controller_round_trip_over_http() {
    let (base, captured) = spawn_engine_server().await;
    let engine = Arc::new(HttpDraftingEngine::new(base));
    let controller = SessionController::new(
        engine,
        SessionConfig::default(),
        "We want to reduce onboarding time...",
    );

    assert_eq!(controller.generate().await, ActionOutcome::Applied);
    assert!(controller.snapshot().state.is_blocked());

    controller.set_answer("q1", "  8 weeks  ");
    assert_eq!(controller.refine().await, ActionOutcome::Applied);

    let captured = captured.lock().unwrap();
    let (path, body) = &captured[1];
    assert_eq!(path, "/refine");
    assert_eq!(body["raw_text"], "We want to reduce onboarding time...");
    assert_eq!(body["answers"], json!({ "q1": "8 weeks" }));
    assert_eq!(
        body["policy"],
        json!({ "max_questions": 3, "allow_proceed_with_assumptions": true })
    );
    assert_eq!(body["question_set"][0]["id"], "q1");
    assert_eq!(body["question_set"][0]["required"], true);
    assert_eq!(body["draft_lfo"]["goal"], "Faster onboarding for new engineers");
    assert!(body["draft_lfo"].get("user_answers").is_none());

    let snapshot = controller.snapshot();
    assert!(snapshot.state.answers().is_empty());
    assert!(!snapshot.state.can_refine());
    assert!(!snapshot.state.is_blocked());
}

#[tokio::test]
async fn test_controller_failure_over_http_keeps_state() {
    let app = Router::new().route("/draft", post(failing_handler));
    let engine = Arc::new(HttpDraftingEngine::new(spawn_server(app).await));
    let controller = SessionController::new(engine, SessionConfig::default(), "text");

    assert_eq!(controller.generate().await, ActionOutcome::Failed);

    let snapshot = controller.snapshot();
    assert!(snapshot.state.result().is_none());
    assert_eq!(
        snapshot.error.as_deref(),
        Some("API error 500\nengine exploded: Invalid LLM JSON")
    );
    assert!(!snapshot.busy);
}
