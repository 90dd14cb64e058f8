//! Route handlers — the orchestrator lives in `chat_handler`.

use crate::SharedState;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use solace_core::message::SessionId;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

/// Shown when the query is empty. Not a failure; not logged as one.
const EMPTY_QUERY_REPLY: &str = "Please type something to start the conversation.";

/// Build the Axum router with all gateway routes.
///
/// `allowed_origin`: exact CORS origin, or `None` to allow any — the
/// frontend is a public static chat page.
pub fn build_router(state: SharedState, allowed_origin: Option<&str>) -> Router {
    let cors = match allowed_origin.and_then(|o| o.parse::<axum::http::HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .route("/sessions/{id}", delete(clear_session_handler))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

// --- Wire types ---

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub crisis: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

// --- Handlers ---

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The orchestrator. Sequencing:
/// empty input → prompting reply; crisis keywords → safety message,
/// model and retrieval skipped; otherwise → dialogue engine. Handled
/// outcomes are always 200 — the engine already maps its own failures
/// to a fallback reply, so nothing here can surface a 5xx.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = SessionId::new(payload.session_id);
    let query = payload.query.trim();

    if query.is_empty() || !session_id.is_valid() {
        return Json(ChatResponse {
            response: EMPTY_QUERY_REPLY.into(),
            crisis: false,
        });
    }

    if solace_safety::contains_crisis_keywords(query) {
        let response = state.safety.pick().to_string();
        info!(session = %session_id, "crisis keywords detected, short-circuiting");
        state.chat_log.record(&session_id, query, &response, true);
        return Json(ChatResponse {
            response,
            crisis: true,
        });
    }

    let response = state.engine.respond(&session_id, query).await;
    state.chat_log.record(&session_id, query, &response, false);

    Json(ChatResponse {
        response,
        crisis: false,
    })
}

/// Surfaces the store's `clear`: 204 when a session was removed,
/// 404 when the id was never seen (or already cleared).
async fn clear_session_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StatusCode {
    let session_id = SessionId::new(id);
    if state.store.clear(&session_id).await {
        info!(session = %session_id, "session cleared");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
