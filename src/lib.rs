//! # event-schema-gen
//!
//! Infers a minimal JSON Schema from a single representative JSON sample and
//! fills placeholders in a template schema document.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_schema_gen::{Result, SchemaGenerator};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let sample = json!({"eventName": "Login", "userId": 5, "tags": ["a", "b"]});
//!     let template = json!({"$id": "###Replace_Me", "title": "###Replace_Me", "properties": {}});
//!
//!     let schema = SchemaGenerator::default().build_schema(&sample, &template)?;
//!     assert_eq!(schema.file_name(), "Login_schema.json");
//!     assert_eq!(schema.document["properties"]["userId"], json!({"type": "integer"}));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  sample.json ─┐                                   ┌─> <event>_schema.json
//!               ├─ loader ─> generator ─> output ───┤
//! template.json ┘              │                    └─> success notice
//!                     schema (infer) + template (fill, merge)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Schema inference from JSON values
pub mod schema;

/// Template placeholder substitution and merging
pub mod template;

/// Sample + template -> schema document
pub mod generator;

/// JSON document loading
pub mod loader;

/// Schema file output
pub mod output;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{GeneratedSchema, SchemaGenerator};
pub use schema::{infer_schema, SchemaInferrer};
