//! OpenAI-Compatible Chat Completions Provider
//!
//! One provider implementation covers both Groq and OpenAI: they speak the
//! same chat-completions wire format and differ only in base URL, default
//! model, and credential.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{Completion, LlmProvider, ProviderConfig, TokenUsage};
use crate::types::{ErrorCategory, ErrorClassifier, LlmError, ReadmeError, Result};

/// Chat-completions provider with secure API key handling.
pub struct ChatCompletionsProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    name: &'static str,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for ChatCompletionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsProvider")
            .field("name", &self.name)
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatCompletionsProvider {
    pub fn new(
        config: ProviderConfig,
        name: &'static str,
        default_api_base: &str,
        default_model: &str,
    ) -> Result<Self> {
        let api_base = config
            .api_base
            .unwrap_or_else(|| default_api_base.to_string());
        let model = config.model.unwrap_or_else(|| default_model.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadmeError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key,
            api_base,
            model,
            name,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are an expert technical writer. Respond with clean Markdown \
                              and no surrounding commentary."
                        .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        }
    }
}

#[async_trait]
impl LlmProvider for ChatCompletionsProvider {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        info!(
            "Generating with {} (model: {}, temperature: {})",
            self.name, self.model, self.temperature
        );

        let request = self.build_request(prompt);
        let url = format!("{}/chat/completions", self.api_base);

        debug!(prompt_chars = prompt.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let category = if e.is_timeout() || e.is_connect() {
                    ErrorCategory::Network
                } else {
                    ErrorCategory::Unknown
                };
                LlmError::with_provider(category, format!("request failed: {}", e), self.name)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorClassifier::classify_http_status(
                status,
                &format!("API error ({}): {}", status, body),
                self.name,
            )
            .into());
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            LlmError::with_provider(
                ErrorCategory::Transient,
                format!("failed to parse response: {}", e),
                self.name,
            )
        })?;

        let usage = body
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                LlmError::with_provider(
                    ErrorCategory::Transient,
                    "no content in completion response",
                    self.name,
                )
            })?;

        debug!(output_tokens = usage.output_tokens, "Received completion");

        Ok(Completion {
            text,
            usage,
            model: self.model.clone(),
            provider: self.name.to_string(),
        })
    }

    fn name(&self) -> &str {
        self.name
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ChatCompletionsProvider {
        let config = ProviderConfig {
            provider: "groq".to_string(),
            model: None,
            api_key: SecretString::from("key".to_string()),
            api_base: None,
            timeout_secs: 30,
            temperature: 0.3,
            max_tokens: 128,
        };
        ChatCompletionsProvider::new(
            config,
            "groq",
            crate::constants::provider::GROQ_API_BASE,
            crate::constants::provider::GROQ_DEFAULT_MODEL,
        )
        .unwrap()
    }

    #[test]
    fn test_request_carries_prompt_and_model() {
        let p = provider();
        let request = p.build_request("describe this project");
        assert_eq!(request.model, crate::constants::provider::GROQ_DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].content, "describe this project");
    }

    #[test]
    fn test_response_deserialization() {
        let raw = "{
            \"choices\": [{\"message\": {\"content\": \"## Usage\\nRun it.\"}}],
            \"usage\": {\"prompt_tokens\": 42, \"completion_tokens\": 7}
        }";
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("## Usage\nRun it.")
        );
        assert_eq!(parsed.usage.unwrap().completion_tokens, 7);
    }
}
