//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Project scanning constants
pub mod scan {
    /// Maximum files reported in quick mode
    pub const MAX_QUICK_FILES: usize = 10;

    /// Maximum directories reported in quick mode
    pub const MAX_QUICK_DIRS: usize = 10;

    /// Maximum dependencies reported in quick mode (overflow gets a marker)
    pub const MAX_QUICK_DEPS: usize = 10;

    /// Character cap when reading a file prefix for content collection
    pub const CONTENT_PREFIX_CHARS: usize = 10_000;

    /// Length cap for the extracted project purpose synopsis
    pub const PURPOSE_MAX_CHARS: usize = 250;

    /// Maximum function/class insights captured per key file
    pub const MAX_INSIGHTS_PER_FILE: usize = 10;
}

/// Generation orchestrator constants
pub mod generation {
    /// Maximum attempts per section before substituting the placeholder
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Fixed delay between retry attempts (seconds)
    pub const RETRY_DELAY_SECS: u64 = 60;

    /// Fixed delay after each successful section, to respect rate limits (seconds)
    pub const SECTION_DELAY_SECS: u64 = 2;

    /// Placeholder substituted for a section that exhausted its retries
    pub const FAILED_SECTION_PLACEHOLDER: &str =
        "*This section could not be generated. Please try again later.*";
}

/// LLM provider constants
pub mod provider {
    /// Default Groq API base (OpenAI-compatible)
    pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

    /// Default Groq model
    pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

    /// OpenAI API base
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

    /// Default OpenAI model
    pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Default completion token cap
    pub const DEFAULT_MAX_TOKENS: usize = 2048;

    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
}
