//! Run configuration
//!
//! [`GeneratorConfig`] holds everything one invocation needs. It is built
//! from the command line and validated before any file is touched.

use crate::error::{Error, Result};
use crate::generator::SchemaGenerator;
use crate::output::SchemaWriter;
use crate::schema::{ArrayShape, SchemaInferrer};
use crate::template::{DEFAULT_EVENT_FIELD, PLACEHOLDER};
use std::path::{Path, PathBuf};

/// Required extension of sample and template files
pub const JSON_EXTENSION: &str = ".json";

/// Configuration for a single generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the schema file is written to
    pub output_dir: PathBuf,

    /// Sample JSON document
    pub sample_path: PathBuf,

    /// Template JSON document
    pub template_path: PathBuf,

    /// Pretty-print the output instead of compact JSON
    pub pretty: bool,

    /// Tag ISO-8601 timestamps with `format: "date"`
    pub date_detection: bool,

    /// Layout of array descriptors
    pub array_shape: ArrayShape,

    /// Token replaced in the template's `$id` and `title`
    pub placeholder: String,

    /// Sample field holding the event name
    pub event_field: String,
}

impl GeneratorConfig {
    /// Create a config with default options
    pub fn new(
        output_dir: impl Into<PathBuf>,
        sample_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            sample_path: sample_path.into(),
            template_path: template_path.into(),
            pretty: false,
            date_detection: true,
            array_shape: ArrayShape::default(),
            placeholder: PLACEHOLDER.to_string(),
            event_field: DEFAULT_EVENT_FIELD.to_string(),
        }
    }

    /// Check paths and options
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::invalid_argument("Output path cannot be empty"));
        }

        require_json_extension("Sample", &self.sample_path)?;
        require_json_extension("Template", &self.template_path)?;

        if self.placeholder.is_empty() {
            return Err(Error::invalid_argument("Placeholder token cannot be empty"));
        }

        if self.event_field.is_empty() {
            return Err(Error::invalid_argument("Event field name cannot be empty"));
        }

        Ok(())
    }

    /// Build the schema inferrer for this run
    pub fn inferrer(&self) -> SchemaInferrer {
        SchemaInferrer::new()
            .with_date_detection(self.date_detection)
            .with_array_shape(self.array_shape)
    }

    /// Build the generator for this run
    pub fn generator(&self) -> SchemaGenerator {
        SchemaGenerator::new(self.inferrer())
            .with_placeholder(&self.placeholder)
            .with_event_field(&self.event_field)
    }

    /// Build the output writer for this run
    pub fn writer(&self) -> SchemaWriter {
        SchemaWriter::new(&self.output_dir).with_pretty(self.pretty)
    }
}

/// Sample and template paths must end in `.json`
fn require_json_extension(role: &str, path: &Path) -> Result<()> {
    if path.to_string_lossy().ends_with(JSON_EXTENSION) {
        Ok(())
    } else {
        Err(Error::invalid_extension(role, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("out", "sample.json", "template.json");
        assert!(!config.pretty);
        assert!(config.date_detection);
        assert_eq!(config.array_shape, ArrayShape::Wrapped);
        assert_eq!(config.placeholder, "###Replace_Me");
        assert_eq!(config.event_field, "eventName");
        config.validate().unwrap();
    }

    #[test_case("sample.txt", "template.json", "Sample" ; "sample extension")]
    #[test_case("sample.json", "template.yaml", "Template" ; "template extension")]
    #[test_case("sample", "template.json", "Sample" ; "no extension")]
    #[test_case("sample.JSON", "template.json", "Sample" ; "extension is case sensitive")]
    fn test_wrong_extension(sample: &str, template: &str, expected_role: &str) {
        let config = GeneratorConfig::new("out", sample, template);
        match config.validate().unwrap_err() {
            Error::InvalidExtension { role, .. } => assert_eq!(role, expected_role),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_options_rejected() {
        let mut config = GeneratorConfig::new("out", "sample.json", "template.json");
        config.placeholder = String::new();
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidArgument { .. }
        ));

        let mut config = GeneratorConfig::new("out", "sample.json", "template.json");
        config.event_field = String::new();
        assert!(config.validate().is_err());

        let config = GeneratorConfig::new("", "sample.json", "template.json");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_writer_targets_output_dir() {
        let config = GeneratorConfig::new("schemas/out", "sample.json", "template.json");
        assert_eq!(config.writer().output_dir(), Path::new("schemas/out"));
    }
}
