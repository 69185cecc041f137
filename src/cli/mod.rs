//! CLI module
//!
//! Command-line interface for generating a schema from a sample.
//!
//! ```text
//! event-schema-gen <OUTPUT_PATH> <SAMPLE_JSON> <TEMPLATE_JSON> [OPTIONS]
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
