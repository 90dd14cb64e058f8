//! Configuration loading, validation, and management for Solace.
//!
//! Loads configuration from `~/.solace/config.toml` (or the path in
//! `SOLACE_CONFIG`) with environment variable overrides. Validates all
//! settings at startup; a missing file means defaults, not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The root configuration structure.
///
/// Maps directly to `~/.solace/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the LLM backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// LLM provider name ("groq", "openai", "ollama", or a custom base URL key)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Max tokens per reply — replies are meant to be short
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Dialogue engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Document retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_provider() -> String {
    "groq".into()
}
fn default_model() -> String {
    "llama-3.1-8b-instant".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    300
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("engine", &self.engine)
            .field("retrieval", &self.retrieval)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How many recent turns are visible to the model per request
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Cap on turns retained per session; oldest are evicted past this
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Provider call timeout; a slow call is treated as a failure
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_history_window() -> usize {
    5
}
fn default_max_turns() -> usize {
    200
}
fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            max_turns: default_max_turns(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Directory of plain-text documents used for grounding
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Retrieved context shorter than this (after trim) is ignored
    #[serde(default = "default_min_context_len")]
    pub min_context_len: usize,
}

fn default_data_dir() -> String {
    "./data".into()
}
fn default_min_context_len() -> usize {
    10
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            min_context_len: default_min_context_len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Exact origin allowed by CORS; `None` allows any origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origin: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            engine: EngineConfig::default(),
            retrieval: RetrievalConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load configuration with environment variable overrides.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("SOLACE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("config.toml"));
        let mut config = Self::load_from(&config_path)?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("SOLACE_API_KEY")
                .ok()
                .or_else(|| std::env::var("GROQ_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(provider) = std::env::var("SOLACE_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("SOLACE_MODEL") {
            config.model = model;
        }

        // Hosting platforms inject the port this way
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse()
        {
            config.gateway.port = port;
        }

        Ok(config)
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate settings that would otherwise fail at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be in [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        if self.engine.history_window == 0 {
            return Err(ConfigError::Invalid(
                "engine.history_window must be at least 1".into(),
            ));
        }
        if self.engine.max_turns < self.engine.history_window {
            return Err(ConfigError::Invalid(format!(
                "engine.max_turns ({}) must be >= engine.history_window ({})",
                self.engine.max_turns, self.engine.history_window
            )));
        }
        if self.engine.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "engine.request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The Solace configuration directory (`~/.solace`).
    pub fn config_dir() -> PathBuf {
        home_dir().join(".solace")
    }
}

#[cfg(windows)]
fn home_dir() -> PathBuf {
    std::env::var("USERPROFILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(not(windows))]
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
