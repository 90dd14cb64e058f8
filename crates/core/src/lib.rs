//! # Solace Core
//!
//! Domain types, traits, and error definitions for the Solace support
//! chatbot backend. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator (LLM backend, document retrieval, chat
//! logging) is defined as a trait here. Implementations live in their
//! respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod log;
pub mod message;
pub mod provider;
pub mod retrieval;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use log::ChatLog;
pub use message::{ChatMessage, Role, SessionId, Turn};
pub use provider::{ChatProvider, CompletionRequest, CompletionResponse, Usage};
pub use retrieval::Retriever;
