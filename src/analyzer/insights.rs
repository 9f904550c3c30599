//! Content & Insight Collector
//!
//! Reads bounded prefixes of project files and applies lightweight pattern
//! extraction to pull out docstrings and definition-plus-docstring pairs.
//! This is a surface scan over text, not a parser: syntactically invalid
//! sources are fine and files with no matches yield empty results.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::scan;
use crate::types::FileInsight;

/// File stems treated as "key" files worth insight extraction
/// (entry points, UI and generator modules).
const KEY_FILE_STEMS: &[&str] = &[
    "main",
    "app",
    "index",
    "server",
    "run",
    "cli",
    "ui",
    "generator",
    "core",
];

static DOCSTRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)("""|''')(.*?)("""|''')"#).expect("valid regex")
});

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)def\s+(\w+)\s*\([^)]*\)[^:\n]*:\s*\n\s*("""|''')(.*?)("""|''')"#)
        .expect("valid regex")
});

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class\s+(\w+)[^:\n]*:\s*\n\s*("""|''')(.*?)("""|''')"#)
        .expect("valid regex")
});

pub struct ContentCollector {
    max_chars: usize,
}

impl Default for ContentCollector {
    fn default() -> Self {
        Self {
            max_chars: scan::CONTENT_PREFIX_CHARS,
        }
    }
}

impl ContentCollector {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Read bounded prefixes of the given files, keyed by relative path.
    ///
    /// Read errors (permission, encoding) are captured as inline error
    /// strings rather than raised, so one bad file never aborts collection.
    pub fn collect_contents(&self, root: &Path, files: &[String]) -> BTreeMap<String, String> {
        let mut contents = BTreeMap::new();

        for file in files {
            let text = match fs::read_to_string(root.join(file)) {
                Ok(text) => prefix_chars(&text, self.max_chars),
                Err(e) => {
                    debug!("Could not read {}: {}", file, e);
                    format!("[error reading file: {}]", e)
                }
            };
            contents.insert(file.clone(), text);
        }

        contents
    }

    /// Run insight extraction over the key files among `files`.
    ///
    /// The entry point is always treated as key; other files qualify by
    /// stem. Files yielding no insights are omitted from the map.
    pub fn collect_insights(
        &self,
        root: &Path,
        files: &[String],
        main_file: Option<&str>,
    ) -> BTreeMap<String, FileInsight> {
        let mut insights = BTreeMap::new();

        for file in files {
            if !is_key_file(file, main_file) {
                continue;
            }
            let Ok(text) = fs::read_to_string(root.join(file)) else {
                continue;
            };
            let insight = extract_insights(&prefix_chars(&text, self.max_chars));
            if !insight.is_empty() {
                insights.insert(file.clone(), insight);
            }
        }

        insights
    }
}

/// Check whether a relative path counts as a key file.
fn is_key_file(file: &str, main_file: Option<&str>) -> bool {
    if Some(file) == main_file {
        return true;
    }
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| KEY_FILE_STEMS.contains(&stem.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extract a module summary and definition docstrings from source text.
pub fn extract_insights(text: &str) -> FileInsight {
    let module_summary = DOCSTRING_RE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| collapse_whitespace(m.as_str()))
        .unwrap_or_default();

    FileInsight {
        module_summary,
        key_functions: capture_definitions(&FUNCTION_RE, text),
        key_classes: capture_definitions(&CLASS_RE, text),
    }
}

fn capture_definitions(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .take(scan::MAX_INSIGHTS_PER_FILE)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let description = collapse_whitespace(caps.get(3)?.as_str());
            Some(format!("{}: {}", name, description))
        })
        .collect()
}

/// Extract a purpose synopsis from a main file's text: the leading docstring
/// if present, else the first run of `#` comment lines. Length-capped.
pub fn extract_purpose(text: &str) -> Option<String> {
    let synopsis = DOCSTRING_RE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|s| !s.is_empty())
        .or_else(|| leading_comment_block(text));

    synopsis.map(|s| prefix_chars(&s, scan::PURPOSE_MAX_CHARS))
}

fn leading_comment_block(text: &str) -> Option<String> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() && lines.is_empty() {
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#') {
            // Shebangs and encoding cookies are not descriptions
            if comment.starts_with('!') || comment.contains("coding:") {
                continue;
            }
            lines.push(comment.trim().to_string());
        } else {
            break;
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Take the first `max` characters of a string along char boundaries.
fn prefix_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#""""A sample tool."""

def greet(name):
    """Say hello to a user."""
    return f"Hello {name}"

def _hidden():
    pass

class Greeter:
    """Greets people politely."""

    def run(self):
        """Run the greeting loop."""
        pass
"#;

    #[test]
    fn test_module_summary_extraction() {
        let insight = extract_insights(SAMPLE);
        assert_eq!(insight.module_summary, "A sample tool.");
    }

    #[test]
    fn test_function_and_class_capture() {
        let insight = extract_insights(SAMPLE);
        assert!(
            insight
                .key_functions
                .contains(&"greet: Say hello to a user.".to_string())
        );
        assert!(
            insight
                .key_classes
                .contains(&"Greeter: Greets people politely.".to_string())
        );
        // no docstring, no insight
        assert!(!insight.key_functions.iter().any(|f| f.starts_with("_hidden")));
    }

    #[test]
    fn test_no_matches_yield_empty_insight() {
        let insight = extract_insights("x = 1\ny = 2\n");
        assert!(insight.is_empty());
    }

    #[test]
    fn test_purpose_from_docstring_is_capped() {
        let long = format!("\"\"\"{}\"\"\"\n", "word ".repeat(200));
        let purpose = extract_purpose(&long).unwrap();
        assert!(purpose.chars().count() <= 250);
    }

    #[test]
    fn test_purpose_from_comment_block() {
        let text = "#!/usr/bin/env python\n# A scraping helper.\n# Fetches pages.\nimport os\n";
        assert_eq!(
            extract_purpose(text),
            Some("A scraping helper. Fetches pages.".to_string())
        );
    }

    #[test]
    fn test_read_error_becomes_inline_string() {
        let dir = TempDir::new().unwrap();
        let collector = ContentCollector::default();
        let contents =
            collector.collect_contents(dir.path(), &["missing.py".to_string()]);
        assert!(contents["missing.py"].starts_with("[error reading file:"));
    }

    #[test]
    fn test_contents_are_prefix_bounded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.py"), "a".repeat(500)).unwrap();

        let collector = ContentCollector::new(100);
        let contents = collector.collect_contents(dir.path(), &["big.py".to_string()]);
        assert_eq!(contents["big.py"].len(), 100);
    }

    #[test]
    fn test_key_file_selection() {
        assert!(is_key_file("app.py", None));
        assert!(is_key_file("src/ui.py", None));
        assert!(is_key_file("weird.py", Some("weird.py")));
        assert!(!is_key_file("helpers.py", None));
    }
}
