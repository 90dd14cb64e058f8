//! End-to-end integration tests for the Solace support backend.
//!
//! These tests exercise the full pipeline from HTTP request to reply:
//! orchestrator sequencing, crisis interception, grounding composition,
//! history carry-over, and failure fallback.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use solace_core::error::ProviderError;
use solace_core::log::NoopChatLog;
use solace_core::message::SessionId;
use solace_core::provider::{ChatProvider, CompletionRequest, CompletionResponse, Usage};
use solace_core::retrieval::NoopRetriever;
use solace_engine::DialogueEngine;
use solace_gateway::{routes, GatewayState};
use solace_memory::SessionStore;
use solace_retrieval::DocumentIndex;
use solace_safety::SafetyMessages;

// ── Mock Provider ────────────────────────────────────────────────────────

/// A mock provider that returns scripted responses in sequence and
/// records every request it saw.
struct ScriptedProvider {
    responses: std::sync::Mutex<Vec<String>>,
    requests: std::sync::Mutex<Vec<CompletionRequest>>,
    call_count: std::sync::Mutex<usize>,
}

impl ScriptedProvider {
    fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: std::sync::Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn last_request(&self) -> CompletionRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        let mut count = self.call_count.lock().unwrap();
        let responses = self.responses.lock().unwrap();
        if *count >= responses.len() {
            panic!(
                "ScriptedProvider exhausted: call #{}, have {}",
                *count,
                responses.len()
            );
        }
        let content = responses[*count].clone();
        *count += 1;
        Ok(CompletionResponse {
            content,
            model: "mock".into(),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        })
    }
}

// ── Harness ──────────────────────────────────────────────────────────────

fn app_with(
    provider: Arc<ScriptedProvider>,
    retriever: Arc<dyn solace_core::retrieval::Retriever>,
) -> (axum::Router, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new(200));
    let engine = Arc::new(DialogueEngine::new(
        provider,
        retriever,
        store.clone(),
        "mock-model",
        0.7,
    ));
    let state = Arc::new(GatewayState {
        engine,
        store: store.clone(),
        safety: SafetyMessages::with_selector(Box::new(|_| 0)),
        chat_log: Arc::new(NoopChatLog),
    });
    (routes::build_router(state, None), store)
}

fn chat_request(session_id: &str, query: &str) -> Request<Body> {
    let body = serde_json::json!({ "session_id": session_id, "query": query });
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// ── E2E: Crisis interception ─────────────────────────────────────────────

#[tokio::test]
async fn e2e_crisis_query_returns_helpline_without_model_call() {
    let provider = Arc::new(ScriptedProvider::new(vec![]));
    let (app, store) = app_with(provider.clone(), Arc::new(NoopRetriever));

    let response = app.oneshot(chat_request("s1", "suicidal")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["crisis"], true);
    assert!(json["response"]
        .as_str()
        .unwrap()
        .contains("(+975) 02 332862"));

    // Model never called, history never touched
    assert_eq!(provider.calls(), 0);
    assert_eq!(store.len(&SessionId::new("s1")).await, 0);
}

// ── E2E: Multi-turn memory ───────────────────────────────────────────────

#[tokio::test]
async fn e2e_second_turn_carries_first_exchange() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        "I hear you. What's been weighing on you?",
        "That sounds exhausting. Have you been sleeping?",
    ]));
    let (app, _store) = app_with(provider.clone(), Arc::new(NoopRetriever));

    let response = app
        .clone()
        .oneshot(chat_request("s1", "work has been hard"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["crisis"], false);

    app.oneshot(chat_request("s1", "I can't keep up"))
        .await
        .unwrap();

    assert_eq!(provider.calls(), 2);
    let second = provider.last_request();
    let contents: Vec<&str> = second.messages.iter().map(|m| m.content.as_str()).collect();
    assert!(contents.contains(&"work has been hard"));
    assert!(contents.contains(&"I hear you. What's been weighing on you?"));
    assert_eq!(contents.last(), Some(&"I can't keep up"));
}

// ── E2E: Grounding stays hidden ──────────────────────────────────────────

#[tokio::test]
async fn e2e_document_context_feeds_prompt_but_not_response() {
    let context =
        "Anxiety is a feeling of worry, nervousness, or unease about an imminent event or \
         something with an uncertain outcome.";
    let index = DocumentIndex::from_documents(vec![context.to_string()]);

    let provider = Arc::new(ScriptedProvider::new(vec![
        "Feeling anxious is very human. What tends to set it off for you?",
    ]));
    let (app, _store) = app_with(provider.clone(), Arc::new(index));

    let response = app
        .oneshot(chat_request("s1", "what is anxiety and worry"))
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    // The retrieved document reached the model...
    let request = provider.last_request();
    assert!(request.messages.last().unwrap().content.contains(context));
    // ...but never the user
    assert!(!text.contains(context));
}

// ── E2E: Session lifecycle ───────────────────────────────────────────────

#[tokio::test]
async fn e2e_clearing_a_session_resets_the_window() {
    let provider = Arc::new(ScriptedProvider::new(vec!["first reply", "fresh reply"]));
    let (app, store) = app_with(provider.clone(), Arc::new(NoopRetriever));

    app.clone()
        .oneshot(chat_request("s1", "hello there"))
        .await
        .unwrap();
    assert_eq!(store.len(&SessionId::new("s1")).await, 1);

    let del = Request::builder()
        .method("DELETE")
        .uri("/sessions/s1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(del).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    app.oneshot(chat_request("s1", "starting over"))
        .await
        .unwrap();

    // The post-clear prompt has no trace of the first exchange
    let request = provider.last_request();
    let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
    assert!(!contents.contains(&"hello there"));
    assert!(!contents.contains(&"first reply"));
}
