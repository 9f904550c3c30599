//! Configuration Loader
//!
//! Loads the YAML configuration file supplied on the command line and
//! validates it. A missing or unreadable config file is a fatal
//! precondition surfaced before any scanning or generation starts.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::types::{ReadmeError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        debug!("Loading config from: {}", path.display());

        let raw = fs::read_to_string(path).map_err(|e| {
            ReadmeError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;

        let config: Config = serde_yaml::from_str(&raw).map_err(|e| {
            ReadmeError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_sections_from_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "sections:\n  - Overview\n  - Installation\n  - Usage").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(
            config.sections,
            Some(vec![
                "Overview".to_string(),
                "Installation".to_string(),
                "Usage".to_string()
            ])
        );
        // untouched fields keep their defaults
        assert_eq!(config.llm.provider, "groq");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ConfigLoader::load_from_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ReadmeError::Config(_)));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "sections: [unterminated").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ReadmeError::Config(_)));
    }
}
