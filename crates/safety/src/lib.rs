//! Crisis detection and safety responses for Solace.
//!
//! The filter is a case-insensitive substring match over a fixed phrase
//! list — deliberately coarse. False positives are acceptable; a missed
//! crisis is the failure mode being minimized. No tokenization, no
//! negation handling, no stemming.
//!
//! When the filter fires, the caller skips all model and retrieval logic
//! and replies with one of a fixed pool of pre-written safety messages,
//! each carrying the helpline contact.

pub mod filter;
pub mod messages;

pub use filter::contains_crisis_keywords;
pub use messages::{HELPLINE_CONTACT, SafetyMessages, Selector};
