//! JSON parser for sample and template documents
//!
//! Documents are loaded fully into memory.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a JSON document from a file path
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded JSON file");
    load_json_from_str(path, &content)
}

/// Parse a JSON document from a string
///
/// `path` is only used to label parse errors.
pub fn load_json_from_str(path: impl AsRef<Path>, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| Error::JsonParse {
        path: path.as_ref().to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}
