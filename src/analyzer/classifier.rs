//! Project Classifier
//!
//! Guesses the primary language and entry-point file for a scanned project.
//! Canonical entry filenames win outright; otherwise the majority file
//! extension decides. Unrecognized layouts classify as `Unknown` - the
//! classifier never fails.

use std::collections::HashMap;
use std::path::Path;

use crate::types::Language;

/// Candidate entry filenames per language, in priority order.
///
/// Declaration order matters twice: earlier languages win ties, and within a
/// language earlier candidates win.
const ENTRY_CANDIDATES: &[(Language, &[&str])] = &[
    (
        Language::Python,
        &["main.py", "app.py", "run.py", "manage.py"],
    ),
    (
        Language::JavaScript,
        &["index.js", "server.js", "app.js", "main.js"],
    ),
    (Language::Java, &["Main.java", "App.java", "Application.java"]),
];

/// Known extension -> language mapping for the frequency fallback.
const EXTENSION_LANGUAGES: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("mjs", Language::JavaScript),
    ("java", Language::Java),
];

/// Classify a project from its root directory and discovered file list.
///
/// Returns `(language, main_file)`; `main_file` is only set when a canonical
/// entry filename was found at the top level.
pub fn classify(root: &Path, files: &[String]) -> (Language, Option<String>) {
    // Canonical entry file at the top level wins outright
    for (language, candidates) in ENTRY_CANDIDATES {
        for candidate in *candidates {
            if root.join(candidate).is_file() {
                return (*language, Some((*candidate).to_string()));
            }
        }
    }

    // Fallback: majority extension among all discovered files
    (majority_extension_language(files), None)
}

fn majority_extension_language(files: &[String]) -> Language {
    let mut counts: HashMap<Language, usize> = HashMap::new();

    for file in files {
        let extension = Path::new(file).extension().and_then(|e| e.to_str());
        if let Some(ext) = extension {
            for (known, language) in EXTENSION_LANGUAGES {
                if ext.eq_ignore_ascii_case(known) {
                    *counts.entry(*language).or_default() += 1;
                    break;
                }
            }
        }
    }

    // Iterate the declaration table rather than the map so ties resolve to
    // the earlier-declared language deterministically.
    let mut best = Language::Unknown;
    let mut best_count = 0usize;
    for (language, _) in ENTRY_CANDIDATES {
        let count = counts.get(language).copied().unwrap_or(0);
        if count > best_count {
            best = *language;
            best_count = count;
        }
    }

    best
}
