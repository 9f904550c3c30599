//! Generate Command
//!
//! Scans a project directory, drives README generation, and writes the
//! result. The API credential is a fatal precondition checked here before
//! any scanning or generation work begins.

use std::fs;
use std::path::PathBuf;

use console::style;
use secrecy::SecretString;
use tracing::info;

use crate::ai::{ProviderConfig, create_provider};
use crate::analyzer::{ProjectScanner, ScanMode};
use crate::config::{Config, ConfigLoader};
use crate::generator::ReadmeGenerator;
use crate::types::{ReadmeError, Result};

pub struct GenerateOptions {
    /// Project directory to scan
    pub project_path: PathBuf,
    /// Optional YAML config file
    pub config_path: Option<PathBuf>,
    /// Section names from the command line (override the config file)
    pub sections: Option<Vec<String>>,
    /// Output path; defaults to README.md inside the project
    pub output: Option<PathBuf>,
    /// Provider override
    pub provider: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// API credential; absence is a fatal precondition
    pub api_key: Option<String>,
}

pub async fn run(options: GenerateOptions) -> Result<()> {
    if !options.project_path.is_dir() {
        return Err(ReadmeError::Config(format!(
            "Project path is not a directory: {}",
            options.project_path.display()
        )));
    }

    let api_key = options.api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
        ReadmeError::Config(
            "API key not found. Set GROQ_API_KEY or pass --api-key".to_string(),
        )
    })?;

    let mut config = match &options.config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => Config::default(),
    };
    if options.sections.is_some() {
        config.sections = options.sections;
    }
    if let Some(provider) = options.provider {
        config.llm.provider = provider;
    }
    if options.model.is_some() {
        config.llm.model = options.model;
    }
    config.validate()?;

    let provider = create_provider(ProviderConfig::from_llm_config(
        &config.llm,
        SecretString::from(api_key),
    ))?;
    let scanner = ProjectScanner::new(&options.project_path, config.scan.clone());
    let generator = ReadmeGenerator::new(provider, config.generation.clone());

    let readme = match &config.sections {
        // Per-section mode: bounded signals, one prompt per section
        Some(sections) => {
            let signals = scanner.scan(ScanMode::Quick);
            generator.create_readme(&signals, sections).await?
        }
        // Whole-document mode: full signals plus contents and insights
        None => {
            let signals = scanner.scan(ScanMode::Deep);
            let collected = scanner.collect(&signals);
            let project_name = project_name(&options.project_path);
            generator
                .generate_concise_readme(&project_name, &signals, &collected)
                .await
        }
    };

    let output = options
        .output
        .unwrap_or_else(|| options.project_path.join("README.md"));
    fs::write(&output, &readme)?;
    info!("README written to {}", output.display());

    println!(
        "{} README created successfully at {}",
        style("✓").green(),
        output.display()
    );

    Ok(())
}

fn project_name(path: &std::path::Path) -> String {
    path.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string()
}
