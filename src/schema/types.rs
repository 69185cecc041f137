//! Schema types

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Runtime kind of a sample value
///
/// Every JSON value falls into exactly one of these. The mapping to a
/// schema `type` is [`ValueKind::schema_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Object,
    Array,
    Unknown,
}

impl ValueKind {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Number(n) => Self::of_number(n),
        }
    }

    /// Classify a number by its source text
    ///
    /// A literal without a fraction or exponent is an integer whatever its
    /// magnitude, so `-0` and values past `u64::MAX` stay integers. Numbers
    /// are kept as text (`arbitrary_precision`), so `1e400` is a float rather
    /// than a parse error.
    fn of_number(n: &Number) -> Self {
        let text = n.to_string();
        if text.is_empty() {
            ValueKind::Unknown
        } else if text.contains(['.', 'e', 'E']) {
            ValueKind::Float
        } else {
            ValueKind::Integer
        }
    }

    /// Schema type emitted for this kind
    ///
    /// | kind                             | type      |
    /// |----------------------------------|-----------|
    /// | String                           | `string`  |
    /// | Integer                          | `integer` |
    /// | Object                           | `object`  |
    /// | Array                            | `array`   |
    /// | Float, Boolean, Null, Unknown    | `any`     |
    pub fn schema_type(self) -> SchemaType {
        match self {
            ValueKind::String => SchemaType::String,
            ValueKind::Integer => SchemaType::Integer,
            ValueKind::Object => SchemaType::Object,
            ValueKind::Array => SchemaType::Array,
            ValueKind::Float | ValueKind::Boolean | ValueKind::Null | ValueKind::Unknown => {
                SchemaType::Any
            }
        }
    }
}

/// Schema `type` keyword values produced by inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Object,
    Array,
    Any,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::String => write!(f, "string"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Object => write!(f, "object"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Any => write!(f, "any"),
        }
    }
}

/// How array descriptors are laid out in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayShape {
    /// `[{"type": "array", "items": ...}]`, the layout existing consumers read
    #[default]
    Wrapped,
    /// `{"type": "array", "items": ...}`
    Plain,
}

/// Schema fragment describing one value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Format hint (only `date` is ever inferred)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Object members, in sample order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Array element schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

impl Descriptor {
    /// Create a bare descriptor of the given type
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
            properties: None,
            items: None,
        }
    }

    /// Create an object descriptor
    pub fn object(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(SchemaType::Object)
        }
    }

    /// Create an array descriptor
    pub fn array(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array)
        }
    }

    /// Set the format hint
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// A descriptor as it appears in the output document
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Serialized as the descriptor object itself
    Single(Descriptor),
    /// Serialized as a one-element list holding the descriptor
    Wrapped(Descriptor),
}

impl SchemaNode {
    /// The descriptor regardless of layout
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            SchemaNode::Single(d) | SchemaNode::Wrapped(d) => d,
        }
    }

    /// Schema type of the underlying descriptor
    pub fn schema_type(&self) -> SchemaType {
        self.descriptor().schema_type
    }

    /// Whether this node serializes as a list
    pub fn is_wrapped(&self) -> bool {
        matches!(self, SchemaNode::Wrapped(_))
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl From<Descriptor> for SchemaNode {
    fn from(descriptor: Descriptor) -> Self {
        SchemaNode::Single(descriptor)
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaNode::Single(d) => d.serialize(serializer),
            SchemaNode::Wrapped(d) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(d)?;
                seq.end()
            }
        }
    }
}

/// Ordered property map
///
/// Keeps keys in the order they were observed in the sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, SchemaNode)>,
}

impl Properties {
    /// Create an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries whose keys are already unique
    pub(super) fn from_unique(entries: Vec<(String, SchemaNode)>) -> Self {
        Self { entries }
    }

    /// Insert a property, replacing an existing entry in place
    pub fn insert(&mut self, key: impl Into<String>, node: SchemaNode) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = node;
        } else {
            self.entries.push((key, node));
        }
    }

    /// Get a property by name
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Iterate over properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Property names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to a JSON object
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
