//! LLM Provider Abstraction
//!
//! Defines the `LlmProvider` trait for text completion generation. Providers
//! accept a rendered prompt string and return a [`Completion`] with token
//! usage metrics, or a classified [`crate::types::LlmError`].

mod chat;

pub use chat::ChatCompletionsProvider;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::provider as defaults;
use crate::types::{ReadmeError, Result};

// =============================================================================
// Completion with Usage Metrics
// =============================================================================

/// Token usage metrics reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// A backend text completion plus metadata.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated text
    pub text: String,
    /// Token usage metrics (zeroed when the backend omits them)
    pub usage: TokenUsage,
    /// Model that produced the completion
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared provider handle threaded through the orchestrator.
pub type SharedProvider = Arc<dyn LlmProvider>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers.
///
/// The API key is redacted in debug output and converted to `SecretString`
/// inside the provider for runtime protection.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Provider type: "groq", "openai"
    pub provider: String,
    /// Model name (provider-specific default when `None`)
    pub model: Option<String>,
    /// API key; a missing key is a fatal precondition
    pub api_key: SecretString,
    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ProviderConfig {
    /// Build a provider config from the loaded application config plus the
    /// credential supplied by the caller.
    pub fn from_llm_config(llm: &crate::config::LlmConfig, api_key: SecretString) -> Self {
        Self {
            provider: llm.provider.clone(),
            model: llm.model.clone(),
            api_key,
            api_base: llm.api_base.clone(),
            timeout_secs: llm.timeout_secs,
            temperature: llm.temperature,
            max_tokens: llm.max_tokens,
        }
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// Text-completion backend: one prompt string in, one completion out.
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Generate a text completion for a prompt.
    async fn complete(&self, prompt: &str) -> Result<Completion>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create a shared provider from configuration.
pub fn create_provider(config: ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "groq" => Ok(Arc::new(ChatCompletionsProvider::new(
            config,
            "groq",
            defaults::GROQ_API_BASE,
            defaults::GROQ_DEFAULT_MODEL,
        )?)),
        "openai" => Ok(Arc::new(ChatCompletionsProvider::new(
            config,
            "openai",
            defaults::OPENAI_API_BASE,
            defaults::OPENAI_DEFAULT_MODEL,
        )?)),
        other => Err(ReadmeError::Config(format!(
            "Unknown provider: {}. Supported: groq, openai",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> ProviderConfig {
        ProviderConfig {
            provider: provider.to_string(),
            model: None,
            api_key: SecretString::from("test-key".to_string()),
            api_base: None,
            timeout_secs: 30,
            temperature: 0.3,
            max_tokens: 256,
        }
    }

    #[test]
    fn test_create_known_providers() {
        let groq = create_provider(config("groq")).unwrap();
        assert_eq!(groq.name(), "groq");
        assert_eq!(groq.model(), defaults::GROQ_DEFAULT_MODEL);

        let openai = create_provider(config("openai")).unwrap();
        assert_eq!(openai.name(), "openai");
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let err = create_provider(config("mystery")).unwrap_err();
        assert!(matches!(err, ReadmeError::Config(_)));
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let debug = format!("{:?}", config("groq"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-key"));
    }
}
