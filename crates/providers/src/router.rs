//! Provider selection from configuration.

use crate::openai_compat::OpenAiCompatProvider;
use solace_config::AppConfig;
use solace_core::provider::ChatProvider;
use std::sync::Arc;

/// Build the configured provider.
///
/// Well-known names get their default base URLs; anything else is
/// treated as a custom OpenAI-compatible base URL.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn ChatProvider> {
    let api_key = config.api_key.clone().unwrap_or_default();

    match config.provider.as_str() {
        "groq" => Arc::new(OpenAiCompatProvider::groq(api_key)),
        "openai" => Arc::new(OpenAiCompatProvider::openai(api_key)),
        "ollama" => Arc::new(OpenAiCompatProvider::ollama(None)),
        custom if custom.starts_with("http") => {
            Arc::new(OpenAiCompatProvider::new("custom", custom, api_key))
        }
        other => {
            tracing::warn!(provider = %other, "unknown provider name, assuming groq");
            Arc::new(OpenAiCompatProvider::groq(api_key))
        }
    }
}
