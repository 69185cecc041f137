//! Schema inference from JSON values

use super::types::{ArrayShape, Descriptor, Properties, SchemaNode, SchemaType, ValueKind};
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Word-bounded `YYYY-MM-DDTHH:MM:SS` anywhere in the string
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\b")
        .expect("date pattern is valid")
});

/// Format emitted for strings carrying a timestamp
pub const DATE_FORMAT: &str = "date";

/// Schema inferrer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Detect ISO-8601 timestamps in strings
    detect_date: bool,
    /// Layout of array descriptors
    array_shape: ArrayShape,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self {
            detect_date: true,
            array_shape: ArrayShape::Wrapped,
        }
    }

    /// Enable/disable date detection
    #[must_use]
    pub fn with_date_detection(mut self, enabled: bool) -> Self {
        self.detect_date = enabled;
        self
    }

    /// Set the array descriptor layout
    #[must_use]
    pub fn with_array_shape(mut self, shape: ArrayShape) -> Self {
        self.array_shape = shape;
        self
    }

    /// Infer the descriptor of any JSON value
    pub fn infer(&self, value: &Value) -> Result<SchemaNode> {
        self.infer_at(value, "")
    }

    /// Infer a string descriptor
    pub fn infer_string(&self, s: &str) -> Descriptor {
        let descriptor = Descriptor::new(SchemaType::String);
        if self.detect_date && is_date(s) {
            descriptor.with_format(DATE_FORMAT)
        } else {
            descriptor
        }
    }

    /// Infer an object descriptor
    pub fn infer_object(&self, map: &Map<String, Value>) -> Result<Descriptor> {
        self.infer_object_at(map, "")
    }

    /// Infer the `properties` of an object, one entry per key in order
    pub fn infer_properties(&self, map: &Map<String, Value>) -> Result<Properties> {
        self.infer_properties_at(map, "")
    }

    /// Infer an array descriptor from its first element
    ///
    /// Elements after the first are never inspected.
    pub fn infer_array(&self, arr: &[Value]) -> Result<SchemaNode> {
        self.infer_array_at(arr, "")
    }

    fn infer_at(&self, value: &Value, pointer: &str) -> Result<SchemaNode> {
        let node = match value {
            Value::String(s) => self.infer_string(s).into(),
            Value::Object(map) => self.infer_object_at(map, pointer)?.into(),
            Value::Array(arr) => self.infer_array_at(arr, pointer)?,
            // integer -> "integer"; float, boolean, null -> "any"
            Value::Number(_) | Value::Bool(_) | Value::Null => {
                Descriptor::new(ValueKind::of(value).schema_type()).into()
            }
        };
        Ok(node)
    }

    fn infer_object_at(&self, map: &Map<String, Value>, pointer: &str) -> Result<Descriptor> {
        Ok(Descriptor::object(self.infer_properties_at(map, pointer)?))
    }

    fn infer_properties_at(&self, map: &Map<String, Value>, pointer: &str) -> Result<Properties> {
        let mut entries = Vec::with_capacity(map.len());

        // Map keys are unique, so entries are appended without a lookup
        for (key, val) in map {
            let child = child_pointer(pointer, key);
            let node = self.infer_at(val, &child)?;
            tracing::debug!(pointer = %child, schema_type = %node.schema_type(), "Inferred property");
            entries.push((key.clone(), node));
        }

        Ok(Properties::from_unique(entries))
    }

    fn infer_array_at(&self, arr: &[Value], pointer: &str) -> Result<SchemaNode> {
        let first = arr.first().ok_or_else(|| Error::empty_array(display_pointer(pointer)))?;
        let items = self.infer_at(first, &child_pointer(pointer, "0"))?;
        let descriptor = Descriptor::array(items);

        Ok(match self.array_shape {
            ArrayShape::Wrapped => SchemaNode::Wrapped(descriptor),
            ArrayShape::Plain => SchemaNode::Single(descriptor),
        })
    }
}

/// Infer the descriptor of a value with default settings (convenience function)
pub fn infer_schema(value: &Value) -> Result<SchemaNode> {
    SchemaInferrer::new().infer(value)
}

fn is_date(s: &str) -> bool {
    DATE_REGEX.is_match(s)
}

/// Append an RFC 6901 reference token
fn child_pointer(parent: &str, token: &str) -> String {
    format!("{parent}/{}", token.replace('~', "~0").replace('/', "~1"))
}

/// The root pointer is the empty string; show it as `/` in messages
fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() {
        "/"
    } else {
        pointer
    }
}
