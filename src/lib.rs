//! readmegen - AI-Assisted README Generator
//!
//! Scans a project's file tree, extracts lightweight structural and textual
//! signals (file list, detected language, dependency manifest, docstrings),
//! and feeds those signals into templated prompts for a generative backend
//! to draft a README document.
//!
//! ## Pipeline
//!
//! Signals flow strictly downward:
//!
//! 1. [`analyzer`]: tree walk, heuristic classification, dependency and
//!    insight extraction into [`ProjectSignals`]
//! 2. [`ai`]: deterministic prompt assembly and the LLM provider abstraction
//! 3. [`generator`]: retry/backoff orchestration and section-by-section
//!    document assembly
//!
//! ## Quick Start
//!
//! ```ignore
//! use readmegen::{ProjectScanner, ReadmeGenerator, ScanMode};
//!
//! let scanner = ProjectScanner::new(&project_path, config.scan.clone());
//! let signals = scanner.scan(ScanMode::Quick);
//! let generator = ReadmeGenerator::new(provider, config.generation.clone());
//! let readme = generator.create_readme(&signals, &sections).await?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: bounded project scanning and signal extraction
//! - [`ai`]: prompt templates, LLM providers
//! - [`generator`]: failure-tolerant generation orchestration
//! - [`config`]: YAML configuration with defaults
//! - [`cli`]: command implementations

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, GenerationConfig, LlmConfig, ScanConfig};

// Error Types
pub use types::error::{ErrorCategory, ErrorClassifier, LlmError, ReadmeError, Result};

// Data Model
pub use types::{FileInsight, GenerationRequest, GenerationTarget, Language, ProjectSignals};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analyzer::{ProjectContents, ProjectScanner, ScanMode};
pub use generator::{ReadmeGenerator, Sleeper, TokioSleeper};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    Completion, LlmProvider, ProviderConfig, SharedProvider, TokenUsage, create_provider,
    section_request, whole_document_request,
};
