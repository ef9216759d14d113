//! Completion provider abstraction for triage-runtime.
//!
//! This module defines the trait a concrete LLM backend implements.
//! No transport ships in this workspace: HTTP clients, authentication,
//! and retry policy belong to the embedding application. The runtime
//! depends only on being handed back an opaque response value from
//! which it can extract text.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;
use thiserror::Error;

/// Errors from completion providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed")]
    AuthError,

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Configuration for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model to use
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 for deterministic)
    pub temperature: f32,

    /// Request timeout hint for the provider
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            max_tokens: 350,
            temperature: 0.0,
            timeout: Duration::from_secs(15),
        }
    }
}

impl CompletionConfig {
    /// Create a config for the given model with default limits.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// Provider abstraction allows swapping LLM backends.
///
/// # Response Contract
/// The returned [`JsonValue`] is treated as opaque: the runtime probes a
/// ranked list of known response shapes to extract the completion text
/// (see [`crate::response`]). Providers are free to return the raw API
/// response body, a chat-completions object, or a bare JSON string.
///
/// # Constraint
/// This is the ONLY place an LLM call can happen. The rules engine in
/// `triage-core` never sees this trait.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Execute a completion for the rendered prompt.
    async fn complete(
        &self,
        prompt: &str,
        config: &CompletionConfig,
    ) -> Result<JsonValue, ProviderError>;

    /// Get provider name for metrics.
    fn name(&self) -> &str;
}
