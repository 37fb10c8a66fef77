//! End-to-end dispatcher tests against a mock automation webhook

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use herald_dispatch::{DispatchError, WebhookDispatcher};
use herald_domain::{AutomationPayload, Insight, RiskLevel};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Serve a router on an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/webhook", addr)
}

fn test_payload() -> AutomationPayload {
    AutomationPayload {
        document_text: "Test".to_string(),
        question: "Test?".to_string(),
        structured_data: Insight {
            key_points: vec!["the test point".to_string()],
            risk_level: RiskLevel::High,
            risk_reason: "test reason".to_string(),
            summary: "test summary".to_string(),
        },
        recipient_email: "test@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_dispatch_success_returns_three_fields_unchanged() {
    let router = Router::new().route(
        "/webhook",
        post(|| async {
            Json(json!({
                "final_answer": "A",
                "email_body": "B",
                "email_status": "sent"
            }))
        }),
    );
    let url = serve(router).await;

    let outcome = WebhookDispatcher::new(url)
        .dispatch(&test_payload())
        .await
        .unwrap();

    assert_eq!(outcome.final_answer, "A");
    assert_eq!(outcome.email_body, "B");
    assert_eq!(outcome.email_status, "sent");
}

#[tokio::test]
async fn test_dispatch_sends_all_four_payload_keys() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let state = Arc::clone(&received);

    let router = Router::new()
        .route(
            "/webhook",
            post(
                |State(state): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                    *state.lock().unwrap() = Some(body);
                    Json(json!({
                        "final_answer": "A",
                        "email_body": "B",
                        "email_status": "sent"
                    }))
                },
            ),
        )
        .with_state(state);
    let url = serve(router).await;

    WebhookDispatcher::new(url)
        .dispatch(&test_payload())
        .await
        .unwrap();

    let body = received.lock().unwrap().take().unwrap();
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(body["document_text"], "Test");
    assert_eq!(body["question"], "Test?");
    assert_eq!(body["recipient_email"], "test@example.com");
    assert_eq!(body["structured_data"]["risk_level"], "High");
}

#[tokio::test]
async fn test_dispatch_empty_object_is_missing_fields() {
    let router = Router::new().route("/webhook", post(|| async { Json(json!({})) }));
    let url = serve(router).await;

    let result = WebhookDispatcher::new(url).dispatch(&test_payload()).await;

    match result {
        Err(DispatchError::MissingFields { missing, raw }) => {
            assert_eq!(missing.len(), 3);
            // The raw body survives for diagnostic display
            assert_eq!(raw, json!({}));
        }
        other => panic!("Expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_partial_response_names_the_missing_key() {
    let router = Router::new().route(
        "/webhook",
        post(|| async {
            Json(json!({
                "final_answer": "A",
                "email_status": "sent"
            }))
        }),
    );
    let url = serve(router).await;

    let result = WebhookDispatcher::new(url).dispatch(&test_payload()).await;

    match result {
        Err(DispatchError::MissingFields { missing, .. }) => {
            assert_eq!(missing, vec!["email_body".to_string()]);
        }
        other => panic!("Expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_empty_body_reports_empty_response() {
    let router = Router::new().route("/webhook", post(|| async { "" }));
    let url = serve(router).await;

    let result = WebhookDispatcher::new(url).dispatch(&test_payload()).await;
    assert!(matches!(result, Err(DispatchError::EmptyResponse)));
}

#[tokio::test]
async fn test_dispatch_non_json_body_preserves_raw() {
    let router = Router::new().route(
        "/webhook",
        post(|| async { "Workflow executed successfully" }),
    );
    let url = serve(router).await;

    let result = WebhookDispatcher::new(url).dispatch(&test_payload()).await;

    match result {
        Err(DispatchError::InvalidJson { raw, .. }) => {
            assert_eq!(raw, "Workflow executed successfully");
        }
        other => panic!("Expected InvalidJson, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_http_error_carries_status_and_body() {
    let router = Router::new().route(
        "/webhook",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "workflow crashed") }),
    );
    let url = serve(router).await;

    let result = WebhookDispatcher::new(url).dispatch(&test_payload()).await;

    match result {
        Err(DispatchError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "workflow crashed");
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}
