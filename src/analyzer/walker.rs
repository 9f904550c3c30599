//! Tree Walker
//!
//! Recursively enumerates files and directories under a project root,
//! producing relative paths in depth-first traversal order. Unreadable
//! subtrees are skipped silently; a failing subtree never aborts the scan.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Default directories to skip
const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    ".git",
    "build",
    "dist",
    "__pycache__",
    "vendor",
    ".venv",
];

/// Relative file and directory listings produced by a walk.
#[derive(Debug, Clone, Default)]
pub struct WalkListing {
    /// Relative file paths in traversal order
    pub files: Vec<String>,
    /// Relative directory paths in traversal order (root excluded)
    pub directories: Vec<String>,
}

pub struct TreeWalker {
    root: PathBuf,
    exclude: Vec<String>,
    max_files: Option<usize>,
    max_directories: Option<usize>,
}

impl TreeWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let exclude = DEFAULT_SKIP_DIRS
            .iter()
            .flat_map(|d| [format!("**/{}", d), format!("**/{}/**", d)])
            .collect();
        Self {
            root: root.as_ref().to_path_buf(),
            exclude,
            max_files: None,
            max_directories: None,
        }
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Cap the reported counts, keeping the first-encountered entries.
    pub fn with_caps(mut self, max_files: usize, max_directories: usize) -> Self {
        self.max_files = Some(max_files);
        self.max_directories = Some(max_directories);
        self
    }

    /// Walk the tree, collecting relative file and directory paths.
    ///
    /// Traversal is directory-first depth-first, matching standard directory
    /// iteration: reproducible for a given filesystem, not sorted.
    pub fn walk(&self) -> WalkListing {
        let mut listing = WalkListing::default();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .build();

        // Unreadable entries surface as Err items; dropping them here is the
        // silent-skip behavior the scan contract requires.
        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if path == self.root || self.should_exclude(path) {
                continue;
            }

            let Some(relative) = self.relative(path) else {
                continue;
            };

            if path.is_dir() {
                if !self.is_full(listing.directories.len(), self.max_directories) {
                    listing.directories.push(relative);
                }
            } else if path.is_file() {
                if !self.is_full(listing.files.len(), self.max_files) {
                    listing.files.push(relative);
                }
            }

            if self.is_full(listing.files.len(), self.max_files)
                && self.is_full(listing.directories.len(), self.max_directories)
            {
                break;
            }
        }

        listing
    }

    fn relative(&self, path: &Path) -> Option<String> {
        path.strip_prefix(&self.root)
            .ok()
            .map(|p| p.to_string_lossy().to_string())
    }

    fn is_full(&self, current: usize, cap: Option<usize>) -> bool {
        cap.is_some_and(|max| current >= max)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();
        fs::write(dir.path().join("src/core.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("docs/guide.md"), "# Guide\n").unwrap();
        dir
    }

    #[test]
    fn test_paths_are_relative_and_exist() {
        let dir = fixture();
        let listing = TreeWalker::new(dir.path()).walk();

        assert_eq!(listing.files.len(), 3);
        assert_eq!(listing.directories.len(), 2);
        for rel in listing.files.iter().chain(listing.directories.iter()) {
            assert!(!Path::new(rel).is_absolute());
            assert!(dir.path().join(rel).exists());
        }
    }

    #[test]
    fn test_caps_keep_first_encountered() {
        let dir = fixture();
        let full = TreeWalker::new(dir.path()).walk();
        let capped = TreeWalker::new(dir.path()).with_caps(2, 1).walk();

        assert_eq!(capped.files, full.files[..2].to_vec());
        assert_eq!(capped.directories, full.directories[..1].to_vec());
    }

    #[test]
    fn test_skip_dirs_excluded() {
        let dir = fixture();
        fs::create_dir(dir.path().join("__pycache__")).unwrap();
        fs::write(dir.path().join("__pycache__/app.cpython-312.pyc"), b"\x00").unwrap();

        let listing = TreeWalker::new(dir.path()).walk();
        assert!(listing.files.iter().all(|f| !f.contains("__pycache__")));
        assert!(
            listing
                .directories
                .iter()
                .all(|d| !d.contains("__pycache__"))
        );
    }

    #[test]
    fn test_missing_root_yields_empty_listing() {
        let listing = TreeWalker::new("/nonexistent/project/root").walk();
        assert!(listing.files.is_empty());
        assert!(listing.directories.is_empty());
    }
}
