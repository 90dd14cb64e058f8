//! The dialogue engine for Solace.
//!
//! Orchestrates one exchange: compose hidden grounding context, build a
//! history-aware prompt, call the model, update the session history.
//! Failures never escape [`DialogueEngine::respond`] — they surface to
//! the user only as a fixed apologetic fallback.

pub mod composer;
pub mod engine;

pub use composer::compose;
pub use engine::{DialogueEngine, FALLBACK_REPLY, SYSTEM_PROMPT};
