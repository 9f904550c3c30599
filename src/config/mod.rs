//! Configuration Module
//!
//! YAML-backed configuration: section list, scan limits, provider and
//! generation settings.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Config, GenerationConfig, LlmConfig, ScanConfig};
