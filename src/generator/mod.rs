//! Generation Orchestrator
//!
//! Drives rendered prompts through the generative backend and assembles the
//! final README text. Strictly sequential: one section at a time, one
//! backend call in flight, fixed delays between retries and between
//! sections.
//!
//! Per-section state machine:
//! `Pending -> Requesting -> (Succeeded | Retrying -> Requesting | Failed-after-retries)`.
//! A section that exhausts its retry budget ends as a visible placeholder
//! rather than aborting the document; whole-document mode degrades to a
//! minimal fallback document instead of propagating.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::ai::{SharedProvider, section_request, whole_document_request};
use crate::analyzer::ProjectContents;
use crate::config::GenerationConfig;
use crate::constants::generation;
use crate::types::{GenerationRequest, ProjectSignals, Result};

// =============================================================================
// Injectable Delay
// =============================================================================

/// Injectable delay dependency so tests can observe elapsed waits without
/// actually sleeping.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

pub struct ReadmeGenerator {
    provider: SharedProvider,
    sleeper: Arc<dyn Sleeper>,
    config: GenerationConfig,
}

impl ReadmeGenerator {
    pub fn new(provider: SharedProvider, config: GenerationConfig) -> Self {
        Self {
            provider,
            sleeper: Arc::new(TokioSleeper),
            config,
        }
    }

    /// Replace the delay dependency (used by tests).
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Per-section mode: generate each named section in order and
    /// concatenate `## {section}` blocks into one document.
    ///
    /// Retryable backend failures are retried up to the configured attempt
    /// budget with a fixed delay; a section that exhausts its budget is
    /// replaced by a visible placeholder and assembly continues.
    /// Non-retryable failures (bad credential, malformed request) propagate.
    pub async fn create_readme(
        &self,
        signals: &ProjectSignals,
        sections: &[String],
    ) -> Result<String> {
        let mut readme = String::new();

        for section in sections {
            info!("Generating section: {}", section);
            let request = section_request(section, signals);

            let content = match self.generate_with_retry(&request).await {
                Ok(content) => {
                    // Fixed pause between sections to respect backend rate limits
                    self.sleeper
                        .sleep(Duration::from_secs(self.config.section_delay_secs))
                        .await;
                    content
                }
                Err(err) if err.is_retryable() => {
                    warn!("Section '{}' failed after retries: {}", section, err);
                    generation::FAILED_SECTION_PLACEHOLDER.to_string()
                }
                Err(err) => return Err(err),
            };

            readme.push_str(&format!("## {}\n\n{}\n\n", section, content.trim()));
        }

        Ok(readme)
    }

    /// Whole-document mode: a single backend invocation, no retry budget.
    /// Never fails - any error is converted into a minimal fallback document
    /// so the caller always receives some text.
    pub async fn generate_concise_readme(
        &self,
        project_name: &str,
        signals: &ProjectSignals,
        collected: &ProjectContents,
    ) -> String {
        let request = whole_document_request(signals, collected);

        match self.provider.complete(&request.prompt).await {
            Ok(completion) => completion.text,
            Err(err) => {
                warn!("Whole-document generation failed: {}", err);
                format!(
                    "# {}\n\n*README generation failed: {}*\n",
                    project_name, err
                )
            }
        }
    }

    /// Bounded-attempt loop around one backend call.
    ///
    /// Fixed inter-attempt delay; a non-retryable error ends the loop
    /// immediately. Returns the last error once the budget is exhausted.
    async fn generate_with_retry(&self, request: &GenerationRequest) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts {
            match self.provider.complete(&request.prompt).await {
                Ok(completion) => return Ok(completion.text),
                Err(err) => {
                    warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt, self.config.max_attempts, request.target, err
                    );

                    let retryable = err.is_retryable();
                    last_error = Some(err);

                    if !retryable {
                        break;
                    }
                    if attempt < self.config.max_attempts {
                        self.sleeper
                            .sleep(Duration::from_secs(self.config.retry_delay_secs))
                            .await;
                    }
                }
            }
        }

        // Loop always records an error before reaching this point
        Err(last_error.unwrap_or_else(|| {
            crate::types::ReadmeError::LlmApi("generation produced no result".to_string())
        }))
    }
}
