//! Dependency Extractor
//!
//! Produces a deduplicated dependency list for a project, either from a
//! recognized manifest at the root or by line-pattern scanning of import
//! statements in source files. Failure to open or parse any single file is
//! swallowed: that file simply contributes nothing.
//!
//! The import scan is deliberately naive (first dot-segment of the target,
//! relative imports excluded). It produces the occasional false positive,
//! which downstream prompt text tolerates.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::Language;

/// Version pin delimiters recognized in pinned-list manifests.
const PIN_DELIMITERS: &[&str] = &["===", "==", ">=", "<=", "~=", "!=", ">", "<", "["];

static PYTHON_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:import|from)\s+([A-Za-z_][A-Za-z0-9_.]*)").expect("valid regex")
});

static JS_REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid regex")
});

static JS_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*import\s+(?:[^'"]*\s+from\s+)?['"]([^'"]+)['"]"#).expect("valid regex")
});

static JAVA_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*import\s+(?:static\s+)?([A-Za-z_][A-Za-z0-9_.]*)").expect("valid regex")
});

/// Extract project dependencies as a deduplicated, sorted list.
///
/// Strategy selection follows the classified language: a recognized manifest
/// at the root is parsed structurally; otherwise source files are scanned
/// for import declarations.
pub fn extract_dependencies(
    root: &Path,
    language: Language,
    files: &[String],
    include_dev: bool,
) -> Vec<String> {
    let deps: BTreeSet<String> = match language {
        Language::Python => {
            let manifest = root.join("requirements.txt");
            if manifest.is_file() {
                parse_requirements(&read_or_empty(&manifest))
            } else {
                scan_sources(root, files, "py", python_imports)
            }
        }
        Language::JavaScript => {
            let manifest = root.join("package.json");
            if manifest.is_file() {
                parse_package_json(&read_or_empty(&manifest), include_dev)
            } else {
                scan_sources(root, files, "js", javascript_imports)
            }
        }
        Language::Java => scan_sources(root, files, "java", java_imports),
        Language::Unknown => BTreeSet::new(),
    };

    deps.into_iter().collect()
}

fn read_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping unreadable file {}: {}", path.display(), e);
            String::new()
        }
    }
}

// =============================================================================
// Manifest Parsing
// =============================================================================

/// Parse a pinned-version dependency list (requirements.txt format).
///
/// Takes the name portion before any version pin delimiter, skipping blank
/// lines and `#` comment lines.
pub fn parse_requirements(content: &str) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut name = line;
        for delimiter in PIN_DELIMITERS {
            if let Some(index) = name.find(delimiter) {
                name = &name[..index];
            }
        }

        let name = name.trim();
        if !name.is_empty() {
            deps.insert(name.to_string());
        }
    }

    deps
}

/// Parse a package.json descriptor, taking declared dependency-name keys.
/// Dev-dependencies are included only when configured.
pub fn parse_package_json(content: &str, include_dev: bool) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(content) else {
        return deps;
    };

    let mut keys = vec!["dependencies"];
    if include_dev {
        keys.push("devDependencies");
    }

    for key in keys {
        if let Some(map) = manifest.get(key).and_then(|v| v.as_object()) {
            deps.extend(map.keys().cloned());
        }
    }

    deps
}

// =============================================================================
// Source-Scan Fallback
// =============================================================================

fn scan_sources(
    root: &Path,
    files: &[String],
    extension: &str,
    extract: fn(&str) -> Vec<String>,
) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    for file in files {
        if Path::new(file).extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let content = read_or_empty(&root.join(file));
        deps.extend(extract(&content));
    }

    deps
}

/// Extract top-level module names from Python import lines.
/// Relative imports (`from . import x`) are excluded.
pub fn python_imports(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| PYTHON_IMPORT_RE.captures(line))
        .filter_map(|caps| {
            let target = caps.get(1)?.as_str();
            first_dot_segment(target)
        })
        .collect()
}

/// Extract package names from JavaScript `require(...)` calls and
/// `import ... from '...'` declarations. Path-like specifiers are excluded.
pub fn javascript_imports(content: &str) -> Vec<String> {
    let mut names = Vec::new();

    for line in content.lines() {
        for caps in JS_REQUIRE_RE.captures_iter(line) {
            if let Some(name) = package_from_specifier(&caps[1]) {
                names.push(name);
            }
        }
        if let Some(caps) = JS_IMPORT_RE.captures(line) {
            if let Some(name) = package_from_specifier(&caps[1]) {
                names.push(name);
            }
        }
    }

    names
}

/// Extract top-level package segments from Java import statements.
pub fn java_imports(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| JAVA_IMPORT_RE.captures(line))
        .filter_map(|caps| first_dot_segment(caps.get(1).map(|m| m.as_str())?))
        .collect()
}

fn first_dot_segment(target: &str) -> Option<String> {
    if target.starts_with('.') {
        return None;
    }
    let segment = target.split('.').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

fn package_from_specifier(specifier: &str) -> Option<String> {
    // Relative/local specifiers are not dependencies
    if specifier.starts_with('.') || specifier.starts_with('/') {
        return None;
    }

    let mut segments = specifier.split('/');
    let first = segments.next()?;

    // Scoped packages keep their scope: "@scope/pkg/sub" -> "@scope/pkg"
    if first.starts_with('@') {
        let second = segments.next()?;
        return Some(format!("{}/{}", first, second));
    }

    Some(first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_requirements_skips_comments_and_blanks() {
        let deps = parse_requirements("foo==1.2\n# comment\n\nbar");
        let expected: BTreeSet<String> = ["foo", "bar"].iter().map(|s| s.to_string()).collect();
        assert_eq!(deps, expected);
    }

    #[test]
    fn test_parse_requirements_pin_delimiters() {
        let deps = parse_requirements("a>=2.0\nb~=1.1\nc[extra]==3\nd<4");
        let expected: BTreeSet<String> =
            ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(deps, expected);
    }

    #[test]
    fn test_python_imports_exclude_relative() {
        let names = python_imports("import numpy as np\nfrom . import local_module\n");
        assert_eq!(names, vec!["numpy".to_string()]);
    }

    #[test]
    fn test_python_imports_take_first_dot_segment() {
        let names = python_imports("from os.path import join\nimport xml.etree.ElementTree\n");
        assert_eq!(names, vec!["os".to_string(), "xml".to_string()]);
    }

    #[test]
    fn test_javascript_imports() {
        let source = concat!(
            "const express = require('express');\n",
            "import React from 'react';\n",
            "import { x } from './local';\n",
            "const util = require('../util');\n",
            "import ui from '@org/ui/button';\n",
        );
        let names = javascript_imports(source);
        assert_eq!(
            names,
            vec![
                "express".to_string(),
                "react".to_string(),
                "@org/ui".to_string()
            ]
        );
    }

    #[test]
    fn test_package_json_dev_dependencies_opt_in() {
        let manifest = r#"{"dependencies":{"react":"^18"},"devDependencies":{"jest":"^29"}}"#;

        let runtime_only = parse_package_json(manifest, false);
        assert!(runtime_only.contains("react"));
        assert!(!runtime_only.contains("jest"));

        let with_dev = parse_package_json(manifest, true);
        assert!(with_dev.contains("jest"));
    }

    #[test]
    fn test_malformed_package_json_yields_empty() {
        assert!(parse_package_json("{not json", false).is_empty());
    }

    #[test]
    fn test_manifest_preferred_over_source_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask==2.0\npytest").unwrap();
        fs::write(dir.path().join("app.py"), "import numpy\n").unwrap();

        let deps = extract_dependencies(
            dir.path(),
            Language::Python,
            &["app.py".to_string()],
            false,
        );
        assert_eq!(deps, vec!["flask".to_string(), "pytest".to_string()]);
    }

    #[test]
    fn test_source_scan_fallback_deduplicates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "import requests\nimport requests\n").unwrap();
        fs::write(dir.path().join("b.py"), "import requests\nimport flask\n").unwrap();

        let deps = extract_dependencies(
            dir.path(),
            Language::Python,
            &["a.py".to_string(), "b.py".to_string()],
            false,
        );
        assert_eq!(deps, vec!["flask".to_string(), "requests".to_string()]);
    }

    #[test]
    fn test_unknown_language_has_no_dependencies() {
        let dir = TempDir::new().unwrap();
        let deps = extract_dependencies(dir.path(), Language::Unknown, &[], false);
        assert!(deps.is_empty());
    }
}
