//! Schema generation from a sample and a template
//!
//! [`SchemaGenerator::build_schema`] ties inference and template filling
//! together. It performs no I/O, so the whole pipeline short of reading and
//! writing files can be exercised in memory.

use crate::error::{Error, Result};
use crate::schema::SchemaInferrer;
use crate::template::{self, DEFAULT_EVENT_FIELD, PLACEHOLDER};
use serde_json::Value;

/// A filled-in schema document ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchema {
    /// Event name taken from the sample
    pub event_name: String,
    /// The merged template
    pub document: Value,
}

impl GeneratedSchema {
    /// Output file name, `<event_name>_schema.json`
    pub fn file_name(&self) -> String {
        format!("{}_schema.json", self.event_name)
    }
}

/// Builds schema documents from samples
#[derive(Debug, Clone)]
pub struct SchemaGenerator {
    inferrer: SchemaInferrer,
    placeholder: String,
    event_field: String,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new(SchemaInferrer::new())
    }
}

impl SchemaGenerator {
    /// Create a generator with the default placeholder and event field
    pub fn new(inferrer: SchemaInferrer) -> Self {
        Self {
            inferrer,
            placeholder: PLACEHOLDER.to_string(),
            event_field: DEFAULT_EVENT_FIELD.to_string(),
        }
    }

    /// Set the placeholder token
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the sample field holding the event name
    #[must_use]
    pub fn with_event_field(mut self, field: impl Into<String>) -> Self {
        self.event_field = field.into();
        self
    }

    /// Build the schema document for a sample
    ///
    /// Every top-level key of the sample, the event field included, becomes
    /// an entry of the template's `properties`.
    pub fn build_schema(&self, sample: &Value, template: &Value) -> Result<GeneratedSchema> {
        let event_name = template::event_name(sample, &self.event_field)?;
        tracing::info!(event = %event_name, "Building schema");

        let filled = template::fill_placeholders(template, &event_name, &self.placeholder)?;

        let fields = sample.as_object().ok_or_else(|| {
            Error::invalid_document("sample", "expected a JSON object at the root")
        })?;
        let properties = self.inferrer.infer_properties(fields)?;
        tracing::debug!(count = properties.len(), "Inferred top-level properties");

        let document = template::merge_schema(&filled, &properties)?;

        Ok(GeneratedSchema {
            event_name,
            document,
        })
    }
}
