//! Error types for event-schema-gen
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for event-schema-gen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{role} file '{}' must be of filetype .json", .path.display())]
    InvalidExtension { role: String, path: PathBuf },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("Missing required field '{field}' in {document}")]
    MissingField { document: String, field: String },

    #[error("Invalid field '{field}' in {document}: {message}")]
    InvalidField {
        document: String,
        field: String,
        message: String,
    },

    #[error("Invalid {document}: {message}")]
    InvalidDocument { document: String, message: String },

    #[error("Failed to parse JSON in '{}' at line {line}, column {column}: {message}", .path.display())]
    JsonParse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Cannot infer schema from empty array at '{pointer}'")]
    EmptyArray { pointer: String },

    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a wrong-extension error
    pub fn invalid_extension(role: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::InvalidExtension {
            role: role.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(document: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            document: document.into(),
            field: field.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        document: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            document: document.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            document: document.into(),
            message: message.into(),
        }
    }

    /// Create an empty array error
    pub fn empty_array(pointer: impl Into<String>) -> Self {
        Self::EmptyArray {
            pointer: pointer.into(),
        }
    }

    /// Create a write error
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias for event-schema-gen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
