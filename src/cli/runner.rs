//! CLI runner - executes a generation run

use crate::cli::commands::Cli;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader::load_json;
use std::path::PathBuf;

/// CLI runner
pub struct Runner {
    config: GeneratorConfig,
}

impl Runner {
    /// Create a new runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self::from_config(cli.to_config())
    }

    /// Create a runner from an explicit config
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the generation, returning the path of the written schema
    ///
    /// Arguments are validated before any file is read or directory created,
    /// so a failed validation leaves no output behind.
    pub fn run(&self) -> Result<PathBuf> {
        let config = &self.config;
        config.validate()?;

        println!("Generating schema for file: {}", config.sample_path.display());
        tracing::debug!(template = %config.template_path.display(), "Loading inputs");
        let sample = load_json(&config.sample_path)?;
        let template = load_json(&config.template_path)?;

        let schema = config.generator().build_schema(&sample, &template)?;
        let path = config.writer().write(&schema)?;

        println!("{} generated successfully.", schema.file_name());
        tracing::info!(path = %path.display(), "Schema written");
        Ok(path)
    }
}
