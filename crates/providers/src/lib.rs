//! LLM provider implementations for Solace.
//!
//! All providers implement the `solace_core::ChatProvider` trait.
//! `build_from_config` selects the correct backend from configuration.

pub mod openai_compat;
pub mod router;

pub use openai_compat::OpenAiCompatProvider;
pub use router::build_from_config;
