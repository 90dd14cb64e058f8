//! HTTP API gateway for Solace.
//!
//! Exposes the chat endpoint, a health check, and session clearing.
//! The chat handler is the orchestrator: it sequences the crisis filter
//! and the dialogue engine and maps every failure to a safe payload —
//! the conversational UI must stay responsive, so handled outcomes are
//! always HTTP 200.
//!
//! Built on Axum.

pub mod routes;

use solace_config::AppConfig;
use solace_core::log::{ChatLog, TracingChatLog};
use solace_engine::DialogueEngine;
use solace_memory::SessionStore;
use solace_retrieval::DocumentIndex;
use solace_safety::SafetyMessages;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state for the gateway.
///
/// All of it is built once at startup; the only mutable piece is the
/// session store, which synchronizes internally.
pub struct GatewayState {
    pub engine: Arc<DialogueEngine>,
    pub store: Arc<SessionStore>,
    pub safety: SafetyMessages,
    pub chat_log: Arc<dyn ChatLog>,
}

pub type SharedState = Arc<GatewayState>;

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let provider = solace_providers::build_from_config(&config);
    let retriever = Arc::new(DocumentIndex::load(&config.retrieval.data_dir));
    let store = Arc::new(SessionStore::new(config.engine.max_turns));

    let engine = Arc::new(
        DialogueEngine::new(
            provider,
            retriever,
            store.clone(),
            &config.model,
            config.temperature,
        )
        .with_max_tokens(config.max_tokens)
        .with_history_window(config.engine.history_window)
        .with_min_context_len(config.retrieval.min_context_len)
        .with_timeout(Duration::from_secs(config.engine.request_timeout_secs)),
    );

    let state = Arc::new(GatewayState {
        engine,
        store,
        safety: SafetyMessages::new(),
        chat_log: Arc::new(TracingChatLog),
    });

    let app = routes::build_router(state, config.gateway.allowed_origin.as_deref());

    info!(addr = %addr, provider = %config.provider, model = %config.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
