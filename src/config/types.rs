//! Configuration Types
//!
//! All configuration structures with sensible defaults. Loaded from a YAML
//! file passed on the command line; every field falls back to its default
//! when omitted.

use serde::{Deserialize, Serialize};

use crate::constants::{generation, provider, scan};
use crate::types::{ReadmeError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// README section names to generate, in order.
    /// `None` selects whole-document mode.
    pub sections: Option<Vec<String>>,

    /// Project scanning settings
    pub scan: ScanConfig,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Generation retry/pacing settings
    pub generation: GenerationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: None,
            scan: ScanConfig::default(),
            llm: LlmConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ReadmeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if let Some(sections) = &self.sections {
            if sections.is_empty() {
                return Err(ReadmeError::Config(
                    "sections list must not be empty; omit it for whole-document mode".to_string(),
                ));
            }
            if sections.iter().any(|s| s.trim().is_empty()) {
                return Err(ReadmeError::Config(
                    "section names must not be blank".to_string(),
                ));
            }
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ReadmeError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ReadmeError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.generation.max_attempts == 0 {
            return Err(ReadmeError::Config(
                "generation max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File cap applied in quick mode
    pub max_files: usize,

    /// Directory cap applied in quick mode
    pub max_directories: usize,

    /// Dependency cap applied in quick mode
    pub max_dependencies: usize,

    /// Character cap when reading file prefixes
    pub content_prefix_chars: usize,

    /// Include dev-dependencies from package manifests
    pub include_dev_dependencies: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: scan::MAX_QUICK_FILES,
            max_directories: scan::MAX_QUICK_DIRS,
            max_dependencies: scan::MAX_QUICK_DEPS,
            content_prefix_chars: scan::CONTENT_PREFIX_CHARS,
            include_dev_dependencies: false,
        }
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type: "groq", "openai"
    pub provider: String,

    /// Model name (provider-specific default when omitted)
    pub model: Option<String>,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: None,
            api_base: None,
            timeout_secs: provider::DEFAULT_TIMEOUT_SECS,
            temperature: provider::DEFAULT_TEMPERATURE,
            max_tokens: provider::DEFAULT_MAX_TOKENS,
        }
    }
}

// =============================================================================
// Generation Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Attempts per section before substituting the placeholder
    pub max_attempts: u32,

    /// Fixed delay between retry attempts (seconds)
    pub retry_delay_secs: u64,

    /// Fixed delay after each successful section (seconds)
    pub section_delay_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: generation::MAX_ATTEMPTS,
            retry_delay_secs: generation::RETRY_DELAY_SECS,
            section_delay_secs: generation::SECTION_DELAY_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_sections_rejected() {
        let config = Config {
            sections: Some(vec![]),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_temperature_range_enforced() {
        let mut config = Config::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_mode_is_whole_document() {
        assert!(Config::default().sections.is_none());
    }
}
