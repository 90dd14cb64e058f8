//! The dialogue state machine.
//!
//! Per request: COMPOSE → MODEL_CALL → { append + respond | fallback }.
//! Every path terminates in exactly one reply; there is no retry loop
//! and no streaming. The crisis filter runs before this engine, in the
//! orchestrator.

use crate::composer::compose;
use solace_core::error::{Error, ProviderError, Result};
use solace_core::message::{ChatMessage, SessionId};
use solace_core::provider::{ChatProvider, CompletionRequest};
use solace_core::retrieval::Retriever;
use solace_memory::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The fixed persona sent as the system message on every request.
pub const SYSTEM_PROMPT: &str = "\
You are a compassionate Bhutanese mental health support chatbot.\n\n\
RULES:\n\
- Keep responses SHORT (2-3 sentences maximum)\n\
- Be warm and empathetic but CONCISE\n\
- Only use 'Kuzu zangpo' once per new user\n\
- No bullet points or numbered lists\n\
- Ask one gentle follow-up question\n\
- Encourage professional help when appropriate\n";

/// What the user sees when the model call fails for any reason.
pub const FALLBACK_REPLY: &str = "I'm sorry, something went wrong. Could you try again?";

/// Orchestrates history-aware model exchanges for one deployment.
///
/// Shared across requests behind an `Arc`; all mutable state lives in
/// the injected [`SessionStore`].
pub struct DialogueEngine {
    provider: Arc<dyn ChatProvider>,
    retriever: Arc<dyn Retriever>,
    store: Arc<SessionStore>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    history_window: usize,
    min_context_len: usize,
    request_timeout: Duration,
}

impl DialogueEngine {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        retriever: Arc<dyn Retriever>,
        store: Arc<SessionStore>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            provider,
            retriever,
            store,
            model: model.into(),
            temperature,
            max_tokens: None,
            history_window: 5,
            min_context_len: 10,
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    pub fn with_min_context_len(mut self, len: usize) -> Self {
        self.min_context_len = len;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Answer one user message. Never fails: every error is logged and
    /// mapped to [`FALLBACK_REPLY`] so the conversation can continue.
    pub async fn respond(&self, session_id: &SessionId, user_text: &str) -> String {
        match self.try_respond(session_id, user_text).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(session = %session_id, error = %e, "model exchange failed, using fallback");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// The fallible path. History is appended only after a successful,
    /// non-empty reply — a failed call leaves the store untouched.
    async fn try_respond(&self, session_id: &SessionId, user_text: &str) -> Result<String> {
        let retrieved = self.retriever.retrieve(user_text).await;
        if retrieved.is_some() {
            debug!(session = %session_id, "grounding context attached");
        }
        let composed = compose(user_text, retrieved.as_deref(), self.min_context_len);

        let messages = self.build_messages(session_id, &composed).await;
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = tokio::time::timeout(self.request_timeout, self.provider.complete(request))
            .await
            .map_err(|_| {
                ProviderError::Timeout(format!(
                    "no reply within {}s",
                    self.request_timeout.as_secs()
                ))
            })??;

        let answer = response.content.trim().to_string();
        if answer.is_empty() {
            return Err(Error::Provider(ProviderError::ApiError {
                status_code: 200,
                message: "empty completion".into(),
            }));
        }

        self.store.append(session_id, user_text, &answer).await;
        Ok(answer)
    }

    /// System persona + bounded recent-turn window + composed message.
    /// Older turns stay in the store but are not resurfaced.
    async fn build_messages(&self, session_id: &SessionId, composed: &str) -> Vec<ChatMessage> {
        let history = self.store.recent(session_id, self.history_window).await;

        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(ChatMessage::system(SYSTEM_PROMPT));
        for turn in &history {
            messages.push(ChatMessage::user(&turn.user_text));
            messages.push(ChatMessage::assistant(&turn.bot_text));
        }
        messages.push(ChatMessage::user(composed));
        messages
    }
}
