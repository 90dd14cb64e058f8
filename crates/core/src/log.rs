//! ChatLog trait — fire-and-forget recording of handled exchanges.
//!
//! The orchestrator records every answered message (including crisis
//! responses) through this seam. Recording must never block or fail the
//! request path; implementations swallow their own errors.

use crate::message::SessionId;

/// Records one handled exchange.
pub trait ChatLog: Send + Sync {
    fn record(&self, session_id: &SessionId, user_text: &str, bot_text: &str, crisis: bool);
}

/// A log sink backed by `tracing`. Structured fields, no payload
/// truncation — log filtering is the operator's job.
pub struct TracingChatLog;

impl ChatLog for TracingChatLog {
    fn record(&self, session_id: &SessionId, user_text: &str, bot_text: &str, crisis: bool) {
        tracing::info!(
            session = %session_id,
            user_len = user_text.len(),
            bot_len = bot_text.len(),
            crisis,
            "chat exchange"
        );
    }
}

/// A log sink that drops everything. For tests and one-shot CLI use.
pub struct NoopChatLog;

impl ChatLog for NoopChatLog {
    fn record(&self, _session_id: &SessionId, _user_text: &str, _bot_text: &str, _crisis: bool) {}
}
