//! Unified Error Type System
//!
//! Centralized error types for the whole application, with error
//! classification so the generation orchestrator can decide whether a
//! backend failure is worth retrying.
//!
//! ## Error Categories
//!
//! - **Transient**: temporary server issues (retry)
//! - **RateLimit**: API rate limiting (wait and retry)
//! - **Network**: connectivity issues (retry)
//! - **Auth**: authentication failures (fail fast)
//! - **BadRequest**: malformed request (fail fast)
//! - **Unknown**: unclassified (conservative retry)

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Error categories driving the orchestrator's retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rate limited - wait then retry
    RateLimit,
    /// Network/connectivity issues - retry
    Network,
    /// Temporary server issues - retry
    Transient,
    /// Authentication failed - fail fast, don't retry
    Auth,
    /// Invalid request - don't retry, fix request
    BadRequest,
    /// Unknown error - conservative retry
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Network => write!(f, "NETWORK"),
            Self::Transient => write!(f, "TRANSIENT"),
            Self::Auth => write!(f, "AUTH"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl ErrorCategory {
    /// Check if this category is worth another attempt on the same backend.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimit | Self::Network | Self::Transient | Self::Unknown
        )
    }
}

// =============================================================================
// LLM Error
// =============================================================================

/// Backend error with category, context, and retry hints.
#[derive(Debug, Clone)]
pub struct LlmError {
    /// Error category for retry decisions
    pub category: ErrorCategory,
    /// Detailed error message
    pub message: String,
    /// Provider that produced the error
    pub provider: Option<String>,
    /// Suggested wait time before retry (if applicable)
    pub retry_after: Option<Duration>,
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{}:{}] {}", provider, self.category, self.message)
        } else {
            write!(f, "[{}] {}", self.category, self.message)
        }
    }
}

impl std::error::Error for LlmError {}

impl LlmError {
    /// Create a new backend error
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            provider: None,
            retry_after: None,
        }
    }

    /// Create error with provider context
    pub fn with_provider(
        category: ErrorCategory,
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            provider: Some(provider.into()),
            retry_after: None,
        }
    }

    /// Add suggested retry delay
    pub fn retry_after(mut self, duration: Duration) -> Self {
        self.retry_after = Some(duration);
        self
    }

    /// Check if the error is worth another attempt
    pub fn is_retryable(&self) -> bool {
        self.category.is_retryable()
    }
}

// =============================================================================
// Error Classifier
// =============================================================================

/// Classifies raw backend failures into categories.
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Classify an error message from any provider
    pub fn classify(message: &str, provider: &str) -> LlmError {
        let lower = message.to_lowercase();

        // Rate limiting patterns
        if lower.contains("rate limit")
            || lower.contains("429")
            || lower.contains("too many requests")
            || lower.contains("quota exceeded")
        {
            return LlmError::with_provider(ErrorCategory::RateLimit, message, provider)
                .retry_after(Duration::from_secs(30));
        }

        // Authentication patterns
        if lower.contains("auth")
            || lower.contains("401")
            || lower.contains("403")
            || lower.contains("api key")
            || lower.contains("invalid key")
            || lower.contains("unauthorized")
            || lower.contains("permission denied")
        {
            return LlmError::with_provider(ErrorCategory::Auth, message, provider);
        }

        // Network patterns
        if lower.contains("network")
            || lower.contains("connection")
            || lower.contains("dns")
            || lower.contains("timeout")
            || lower.contains("timed out")
            || lower.contains("unreachable")
        {
            return LlmError::with_provider(ErrorCategory::Network, message, provider)
                .retry_after(Duration::from_secs(5));
        }

        // Bad request patterns
        if lower.contains("400")
            || lower.contains("bad request")
            || lower.contains("invalid")
            || lower.contains("malformed")
        {
            return LlmError::with_provider(ErrorCategory::BadRequest, message, provider);
        }

        // Transient patterns (server-side issues that may resolve)
        if lower.contains("500")
            || lower.contains("502")
            || lower.contains("503")
            || lower.contains("server error")
            || lower.contains("overloaded")
            || lower.contains("temporary")
            || lower.contains("retry")
        {
            return LlmError::with_provider(ErrorCategory::Transient, message, provider)
                .retry_after(Duration::from_secs(2));
        }

        LlmError::with_provider(ErrorCategory::Unknown, message, provider)
    }

    /// Classify HTTP status code directly (more accurate than string matching)
    pub fn classify_http_status(status: u16, message: &str, provider: &str) -> LlmError {
        match status {
            429 => LlmError::with_provider(ErrorCategory::RateLimit, message, provider)
                .retry_after(Duration::from_secs(30)),
            401 | 403 => LlmError::with_provider(ErrorCategory::Auth, message, provider),
            400 | 404 | 422 => {
                LlmError::with_provider(ErrorCategory::BadRequest, message, provider)
            }
            // 500 series are transient - can retry
            500 | 502 | 503 | 504 => {
                LlmError::with_provider(ErrorCategory::Transient, message, provider)
                    .retry_after(Duration::from_secs(5))
            }
            _ => LlmError::with_provider(ErrorCategory::Unknown, message, provider),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ReadmeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // LLM Errors
    // -------------------------------------------------------------------------
    /// Structured backend error with category and retry hints
    #[error("LLM error: {0}")]
    Llm(LlmError),

    /// Simple LLM API error (use Llm variant for structured errors)
    #[error("LLM API error: {0}")]
    LlmApi(String),
}

impl From<LlmError> for ReadmeError {
    fn from(err: LlmError) -> Self {
        Self::Llm(err)
    }
}

impl ReadmeError {
    /// Classify this error for retry decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Llm(err) => err.category,
            Self::LlmApi(msg) => ErrorClassifier::classify(msg, "unknown").category,
            Self::Io(_) => ErrorCategory::Network,
            Self::Config(_) => ErrorCategory::BadRequest,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Check if the orchestrator should attempt the failed operation again.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ReadmeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_classification() {
        let err = ErrorClassifier::classify("429 Too Many Requests", "groq");
        assert_eq!(err.category, ErrorCategory::RateLimit);
        assert!(err.is_retryable());
        assert_eq!(err.retry_after, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_auth_not_retryable() {
        let err = ErrorClassifier::classify("invalid api key provided", "groq");
        assert_eq!(err.category, ErrorCategory::Auth);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_http_status_classification() {
        assert_eq!(
            ErrorClassifier::classify_http_status(503, "unavailable", "groq").category,
            ErrorCategory::Transient
        );
        assert_eq!(
            ErrorClassifier::classify_http_status(401, "nope", "groq").category,
            ErrorCategory::Auth
        );
    }

    #[test]
    fn test_readme_error_retryability() {
        let retryable = ReadmeError::Llm(LlmError::new(ErrorCategory::Network, "reset"));
        assert!(retryable.is_retryable());

        let fatal = ReadmeError::Llm(LlmError::new(ErrorCategory::Auth, "bad key"));
        assert!(!fatal.is_retryable());
    }
}
