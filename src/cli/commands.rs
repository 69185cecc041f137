//! CLI arguments and argument parsing

use crate::config::GeneratorConfig;
use crate::schema::ArrayShape;
use crate::template::{DEFAULT_EVENT_FIELD, PLACEHOLDER};
use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON Schema from a sample event and a template
#[derive(Parser, Debug)]
#[command(name = "event-schema-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to write `<eventName>_schema.json` into (created if missing)
    pub output_path: PathBuf,

    /// Sample event (JSON)
    pub sample: PathBuf,

    /// Template schema (JSON)
    pub template: PathBuf,

    /// Pretty-print the generated schema
    #[arg(long)]
    pub pretty: bool,

    /// Do not tag ISO-8601 timestamps with `format: "date"`
    #[arg(long)]
    pub no_date_detection: bool,

    /// Emit array descriptors as plain objects instead of one-element lists
    #[arg(long)]
    pub flat_arrays: bool,

    /// Placeholder token in the template's `$id` and `title`
    #[arg(long, default_value = PLACEHOLDER)]
    pub placeholder: String,

    /// Sample field holding the event name
    #[arg(long, default_value = DEFAULT_EVENT_FIELD)]
    pub event_field: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration
    pub fn to_config(&self) -> GeneratorConfig {
        let mut config =
            GeneratorConfig::new(&self.output_path, &self.sample, &self.template);
        config.pretty = self.pretty;
        config.date_detection = !self.no_date_detection;
        config.array_shape = if self.flat_arrays {
            ArrayShape::Plain
        } else {
            ArrayShape::Wrapped
        };
        config.placeholder.clone_from(&self.placeholder);
        config.event_field.clone_from(&self.event_field);
        config
    }
}
