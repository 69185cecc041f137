//! Schema inference module
//!
//! Maps a sample JSON value onto a JSON-Schema-shaped descriptor.
//!
//! # Features
//!
//! - **Closed Type Mapping**: Every value is classified as a [`ValueKind`] first
//! - **Nested Object Support**: Objects recurse, keeping sample key order
//! - **Array Item Inference**: Arrays are described by their first element
//! - **Date Detection**: Strings holding an ISO-8601 timestamp get `format: "date"`

mod inference;
mod types;

pub use inference::{infer_schema, SchemaInferrer, DATE_FORMAT};
pub use types::{ArrayShape, Descriptor, Properties, SchemaNode, SchemaType, ValueKind};
