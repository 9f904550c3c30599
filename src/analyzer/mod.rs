//! Project Analyzer Module
//!
//! Walks a project tree and distills it into [`ProjectSignals`]:
//! - File scanning with skip-dir and gitignore support
//! - Heuristic language and entry-point classification
//! - Manifest or import-scan dependency extraction
//! - Bounded content and docstring insight collection

pub mod classifier;
pub mod dependencies;
pub mod insights;
pub mod walker;

pub use insights::ContentCollector;
pub use walker::{TreeWalker, WalkListing};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::types::{FileInsight, ProjectSignals, truncate_with_marker};

/// Bounding policy for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Summary-only signals with first-N caps on every listing
    Quick,
    /// Full listings plus file contents and insights
    Deep,
}

/// Deep-mode collection products: bounded file contents and per-key-file
/// insights, both keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct ProjectContents {
    pub contents: BTreeMap<String, String>,
    pub insights: BTreeMap<String, FileInsight>,
}

/// Scans one project per invocation; all output is built fresh and never
/// persisted. The filesystem is strictly read-only here.
pub struct ProjectScanner {
    root: PathBuf,
    config: ScanConfig,
}

impl ProjectScanner {
    pub fn new<P: AsRef<Path>>(root: P, config: ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Collect [`ProjectSignals`] under the given bounding policy.
    pub fn scan(&self, mode: ScanMode) -> ProjectSignals {
        info!("Scanning project: {}", self.root.display());

        let walker = match mode {
            ScanMode::Quick => TreeWalker::new(&self.root)
                .with_caps(self.config.max_files, self.config.max_directories),
            ScanMode::Deep => TreeWalker::new(&self.root),
        };
        let listing = walker.walk();
        debug!(
            files = listing.files.len(),
            directories = listing.directories.len(),
            "Walk complete"
        );

        let (language, main_file) = classifier::classify(&self.root, &listing.files);
        debug!(%language, ?main_file, "Classified project");

        let mut dependencies = dependencies::extract_dependencies(
            &self.root,
            language,
            &listing.files,
            self.config.include_dev_dependencies,
        );
        if mode == ScanMode::Quick {
            dependencies = truncate_with_marker(dependencies, self.config.max_dependencies);
        }

        let purpose = main_file
            .as_deref()
            .and_then(|main| fs::read_to_string(self.root.join(main)).ok())
            .and_then(|text| insights::extract_purpose(&text));

        ProjectSignals {
            files: listing.files,
            directories: listing.directories,
            main_file,
            language,
            dependencies,
            purpose,
        }
    }

    /// Deep-mode collection: bounded file contents for every discovered file
    /// and pattern-extracted insights for the key files.
    pub fn collect(&self, signals: &ProjectSignals) -> ProjectContents {
        let collector = ContentCollector::new(self.config.content_prefix_chars);
        ProjectContents {
            contents: collector.collect_contents(&self.root, &signals.files),
            insights: collector.collect_insights(
                &self.root,
                &signals.files,
                signals.main_file.as_deref(),
            ),
        }
    }
}
