//! Session, turn, and chat-message domain types.
//!
//! These are the core value objects that flow through the system:
//! a user sends a message → the orchestrator routes it → the dialogue
//! engine builds a prompt from stored turns → the provider answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied identifier scoping one conversation history.
///
/// Opaque: the backend never generates or validates these beyond a
/// non-empty check at the orchestrator boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is usable (non-empty after trimming).
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One completed exchange: what the user said and what the bot replied.
///
/// Turns are append-only; history is never reordered or edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// The user's message, as received (before context composition).
    pub user_text: String,

    /// The bot's reply, whitespace-trimmed.
    pub bot_text: String,

    /// When the turn was appended.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The role of a message sender in a provider conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (persona, rules)
    System,
    /// The end user
    User,
    /// The AI assistant
    Assistant,
}

/// A single message in the outbound provider prompt.
///
/// Constructed fresh per request and never retained — the store keeps
/// [`Turn`]s, not provider messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
