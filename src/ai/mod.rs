//! AI Module
//!
//! Prompt assembly and the LLM provider abstraction.

pub mod prompt;
pub mod provider;

pub use prompt::{PromptBuilder, section_request, whole_document_request};
pub use provider::{
    ChatCompletionsProvider, Completion, LlmProvider, ProviderConfig, SharedProvider, TokenUsage,
    create_provider,
};
