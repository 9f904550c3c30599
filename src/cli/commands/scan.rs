//! Scan Command
//!
//! Collects and prints project signals without invoking the generative
//! backend. Useful for checking what evidence would feed the prompts.

use std::path::PathBuf;

use crate::analyzer::{ProjectScanner, ScanMode};
use crate::config::ScanConfig;
use crate::types::{ProjectSignals, ReadmeError, Result};

pub fn run(project_path: PathBuf, format: &str, deep: bool) -> Result<()> {
    if !project_path.is_dir() {
        return Err(ReadmeError::Config(format!(
            "Project path is not a directory: {}",
            project_path.display()
        )));
    }

    let scanner = ProjectScanner::new(&project_path, ScanConfig::default());
    let mode = if deep { ScanMode::Deep } else { ScanMode::Quick };
    let signals = scanner.scan(mode);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&signals)?),
        "text" => print_text(&signals),
        other => {
            return Err(ReadmeError::Config(format!(
                "Unknown format '{}'. Valid values: text, json",
                other
            )));
        }
    }

    Ok(())
}

fn print_text(signals: &ProjectSignals) {
    println!("Language:     {}", signals.language);
    println!(
        "Main file:    {}",
        signals.main_file.as_deref().unwrap_or("(not identified)")
    );
    if let Some(purpose) = &signals.purpose {
        println!("Purpose:      {}", purpose);
    }

    println!("\nFiles ({}):", signals.files.len());
    for file in &signals.files {
        println!("  {}", file);
    }

    println!("\nDirectories ({}):", signals.directories.len());
    for dir in &signals.directories {
        println!("  {}", dir);
    }

    println!("\nDependencies ({}):", signals.dependencies.len());
    for dep in &signals.dependencies {
        println!("  {}", dep);
    }
}
