//! In-memory, per-session conversation store.
//!
//! Sessions are created implicitly on first append and destroyed only by
//! an explicit `clear` (or process exit). History is append-only and
//! never reordered. Retained turns are capped per session; the cap
//! bounds memory, while the read-side window bounds what the model sees.

use solace_core::message::{SessionId, Turn};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Thread-safe store mapping session ids to ordered turn histories.
///
/// A single lock guards the whole map. Per-session contention is expected
/// to be negligible (one human typing); if two requests for the same
/// session complete out of order, whichever append wins the lock lands
/// first — that interleaving is unspecified and accepted.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Vec<Turn>>>,
    max_turns: usize,
}

impl SessionStore {
    /// Create a store that retains at most `max_turns` turns per session.
    pub fn new(max_turns: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_turns: max_turns.max(1),
        }
    }

    /// Append a completed exchange, creating the session if absent.
    ///
    /// When the session is at capacity the oldest turn is evicted first.
    pub async fn append(
        &self,
        session_id: &SessionId,
        user_text: impl Into<String>,
        bot_text: impl Into<String>,
    ) {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.0.clone()).or_default();

        if history.len() >= self.max_turns {
            let excess = history.len() + 1 - self.max_turns;
            history.drain(..excess);
            tracing::debug!(session = %session_id, evicted = excess, "session at capacity");
        }

        history.push(Turn::new(user_text, bot_text));
    }

    /// The last `k` turns in original order. Fewer if the history is
    /// shorter; empty for an unknown session. Does not mutate state.
    pub async fn recent(&self, session_id: &SessionId, k: usize) -> Vec<Turn> {
        let sessions = self.sessions.read().await;
        match sessions.get(&session_id.0) {
            Some(history) => {
                let start = history.len().saturating_sub(k);
                history[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Remove a session's entire history. Returns `true` iff a session
    /// existed. Idempotent: a second clear returns `false`, not an error.
    pub async fn clear(&self, session_id: &SessionId) -> bool {
        self.sessions.write().await.remove(&session_id.0).is_some()
    }

    /// Stored turn count for a session (0 if unknown).
    pub async fn len(&self, session_id: &SessionId) -> usize {
        self.sessions
            .read()
            .await
            .get(&session_id.0)
            .map_or(0, Vec::len)
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> SessionId {
        SessionId::new(s)
    }

    #[tokio::test]
    async fn append_then_recent_returns_the_turn() {
        let store = SessionStore::new(200);
        store.append(&sid("s"), "hi", "hello").await;

        let turns = store.recent(&sid("s"), 5).await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user_text, "hi");
        assert_eq!(turns[0].bot_text, "hello");
    }

    #[tokio::test]
    async fn recent_returns_last_k_in_order() {
        let store = SessionStore::new(200);
        for i in 0..7 {
            store.append(&sid("s"), format!("u{i}"), format!("b{i}")).await;
        }

        let turns = store.recent(&sid("s"), 5).await;
        assert_eq!(turns.len(), 5);
        assert_eq!(turns[0].user_text, "u2");
        assert_eq!(turns[4].user_text, "u6");
    }

    #[tokio::test]
    async fn recent_on_unknown_session_is_empty() {
        let store = SessionStore::new(200);
        assert!(store.recent(&sid("ghost"), 5).await.is_empty());
    }

    #[tokio::test]
    async fn clear_removes_history_and_is_idempotent() {
        let store = SessionStore::new(200);
        store.append(&sid("s"), "hi", "hello").await;

        assert!(store.clear(&sid("s")).await);
        assert!(store.recent(&sid("s"), 5).await.is_empty());
        assert!(!store.clear(&sid("s")).await);
    }

    #[tokio::test]
    async fn clear_unknown_session_returns_false() {
        let store = SessionStore::new(200);
        assert!(!store.clear(&sid("never-seen")).await);
    }

    #[tokio::test]
    async fn capacity_evicts_oldest() {
        let store = SessionStore::new(3);
        for i in 0..5 {
            store.append(&sid("s"), format!("u{i}"), format!("b{i}")).await;
        }

        assert_eq!(store.len(&sid("s")).await, 3);
        let turns = store.recent(&sid("s"), 10).await;
        assert_eq!(turns[0].user_text, "u2");
        assert_eq!(turns[2].user_text, "u4");
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new(200);
        store.append(&sid("a"), "from a", "reply a").await;
        store.append(&sid("b"), "from b", "reply b").await;

        assert_eq!(store.recent(&sid("a"), 5).await[0].user_text, "from a");
        assert_eq!(store.recent(&sid("b"), 5).await[0].user_text, "from b");
        assert_eq!(store.session_count().await, 2);

        store.clear(&sid("a")).await;
        assert_eq!(store.len(&sid("b")).await, 1);
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let store = std::sync::Arc::new(SessionStore::new(200));
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(&sid("s"), format!("u{i}"), format!("b{i}")).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        // Order between tasks is unspecified; count must be exact
        assert_eq!(store.len(&sid("s")).await, 20);
    }
}
