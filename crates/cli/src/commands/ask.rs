//! `solace ask` — one message through the full pipeline, no HTTP.
//!
//! Runs the same sequencing as the gateway orchestrator: crisis filter
//! first, then the dialogue engine. Useful for smoke-testing a
//! deployment's config and corpus.

use solace_config::AppConfig;
use solace_core::message::SessionId;
use solace_engine::DialogueEngine;
use solace_memory::SessionStore;
use solace_retrieval::DocumentIndex;
use solace_safety::SafetyMessages;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(message: String, session: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let message = message.trim();
    if message.is_empty() {
        println!("Please type something to start the conversation.");
        return Ok(());
    }

    if solace_safety::contains_crisis_keywords(message) {
        println!("{}", SafetyMessages::new().pick());
        return Ok(());
    }

    if config.api_key.is_none() && config.provider != "ollama" {
        return Err("No API key found. Set SOLACE_API_KEY or GROQ_API_KEY.".into());
    }

    let provider = solace_providers::build_from_config(&config);
    let retriever = Arc::new(DocumentIndex::load(&config.retrieval.data_dir));
    let store = Arc::new(SessionStore::new(config.engine.max_turns));

    let engine = DialogueEngine::new(
        provider,
        retriever,
        store,
        &config.model,
        config.temperature,
    )
    .with_max_tokens(config.max_tokens)
    .with_history_window(config.engine.history_window)
    .with_min_context_len(config.retrieval.min_context_len)
    .with_timeout(Duration::from_secs(config.engine.request_timeout_secs));

    eprint!("  Thinking...");
    let reply = engine.respond(&SessionId::new(session), message).await;
    eprint!("\r              \r");
    println!("{reply}");

    Ok(())
}
