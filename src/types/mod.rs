//! Core Data Model
//!
//! The signal types threaded through the scanning and generation pipeline.
//! Every instance is built fresh per run and discarded once the README text
//! is returned; nothing here is persisted.

pub mod error;

pub use error::{ErrorCategory, ErrorClassifier, LlmError, ReadmeError, Result};

use serde::Serialize;

// =============================================================================
// Language
// =============================================================================

/// Primary project language, chosen by the classifier.
///
/// A closed set: unrecognized layouts classify as `Unknown` rather than
/// failing, and `Unknown` is itself a terminal classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Language {
    Python,
    JavaScript,
    Java,
    #[default]
    Unknown,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::JavaScript => write!(f, "JavaScript"),
            Self::Java => write!(f, "Java"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// =============================================================================
// Project Signals
// =============================================================================

/// Structured summary of a scanned project: the single value the scanning
/// pipeline produces and the prompt assembler consumes.
///
/// Invariants:
/// - `files` and `directories` hold paths relative to the project root
/// - `dependencies` never contains duplicates
/// - truncation keeps the first N entries in traversal order, so results are
///   deterministic for a fixed directory iteration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectSignals {
    /// Relative file paths, in traversal order (bounded in quick mode)
    pub files: Vec<String>,
    /// Relative directory paths, same bounding rule
    pub directories: Vec<String>,
    /// Entry-point file identified by the classifier, if any heuristic matched
    pub main_file: Option<String>,
    /// Primary language (never absent; defaults to `Unknown`)
    pub language: Language,
    /// Deduplicated package names, bounded in quick mode
    pub dependencies: Vec<String>,
    /// Short synopsis pulled from the main file's leading docstring/comments
    pub purpose: Option<String>,
}

// =============================================================================
// File Insight
// =============================================================================

/// Extracted per-file descriptions for a key file, used in deep mode.
///
/// Populated by surface pattern scanning, not parsing: files with no matches
/// yield empty results, and syntactically invalid sources are fine.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileInsight {
    /// First docstring-like block found in the file, or empty
    pub module_summary: String,
    /// "name: description" entries for definitions followed by a docstring
    pub key_functions: Vec<String>,
    /// Same, for class-like definitions
    pub key_classes: Vec<String>,
}

impl FileInsight {
    pub fn is_empty(&self) -> bool {
        self.module_summary.is_empty()
            && self.key_functions.is_empty()
            && self.key_classes.is_empty()
    }
}

// =============================================================================
// Generation Request
// =============================================================================

/// Target of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationTarget {
    /// One named README section
    Section(String),
    /// The entire document in a single call
    WholeDocument,
}

impl std::fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Section(name) => write!(f, "section '{}'", name),
            Self::WholeDocument => write!(f, "whole document"),
        }
    }
}

/// A rendered prompt paired with its target, ready for the backend.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub target: GenerationTarget,
    pub prompt: String,
}

// =============================================================================
// Bounded-List Truncation
// =============================================================================

/// Marker prefix appended when a bounded list overflows.
pub const TRUNCATION_MARKER_PREFIX: &str = "...and ";

/// Truncate a list to `max` entries, appending a "...and K more" marker for
/// the overflow. Keeps the first `max` entries in order.
///
/// Idempotent: a list that already carries a trailing marker and fits the
/// bound passes through untouched, so re-truncating at the same bound never
/// double-marks or drops further data.
pub fn truncate_with_marker(items: Vec<String>, max: usize) -> Vec<String> {
    if let Some(last) = items.last() {
        if last.starts_with(TRUNCATION_MARKER_PREFIX) && items.len() <= max + 1 {
            return items;
        }
    }

    if items.len() <= max {
        return items;
    }

    let overflow = items.len() - max;
    let mut kept: Vec<String> = items.into_iter().take(max).collect();
    kept.push(format!("{}{} more", TRUNCATION_MARKER_PREFIX, overflow));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Python.to_string(), "Python");
        assert_eq!(Language::default().to_string(), "Unknown");
    }

    #[test]
    fn test_truncate_under_bound_is_noop() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(truncate_with_marker(items.clone(), 5), items);
    }

    #[test]
    fn test_truncate_appends_marker() {
        let items: Vec<String> = (0..7).map(|i| format!("f{}", i)).collect();
        let truncated = truncate_with_marker(items, 5);
        assert_eq!(truncated.len(), 6);
        assert_eq!(truncated[4], "f4");
        assert_eq!(truncated[5], "...and 2 more");
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let items: Vec<String> = (0..12).map(|i| format!("f{}", i)).collect();
        let once = truncate_with_marker(items, 5);
        let twice = truncate_with_marker(once.clone(), 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truncate_keeps_first_entries() {
        let items: Vec<String> = (0..3).map(|i| format!("f{}", i)).collect();
        let truncated = truncate_with_marker(items, 2);
        assert_eq!(truncated, vec!["f0", "f1", "...and 1 more"]);
    }
}
