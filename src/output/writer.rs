//! Schema file writer

use crate::error::{Error, Result, ResultExt};
use crate::generator::GeneratedSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated schemas into an output directory
#[derive(Debug, Clone)]
pub struct SchemaWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl SchemaWriter {
    /// Create a writer for the given directory, compact output
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            pretty: false,
        }
    }

    /// Enable/disable pretty printing
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the schema will be written to
    pub fn path_for(&self, schema: &GeneratedSchema) -> PathBuf {
        self.output_dir.join(schema.file_name())
    }

    /// Create the output directory and write the schema into it
    pub fn write(&self, schema: &GeneratedSchema) -> Result<PathBuf> {
        ensure_output_dir(&self.output_dir)?;
        write_schema(&self.output_dir, schema, self.pretty)
    }
}

/// Create the output directory if it does not exist
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| Error::write(dir, e))?;
    tracing::info!(dir = %dir.display(), "Created output directory");
    Ok(())
}

/// Render a document as JSON text
pub fn render(document: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.context("Failed to render schema")
}

/// Write a schema into `dir`, returning the path written
pub fn write_schema(dir: impl AsRef<Path>, schema: &GeneratedSchema, pretty: bool) -> Result<PathBuf> {
    let path = dir.as_ref().join(schema.file_name());
    let contents = render(&schema.document, pretty)?;

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&temp_path, &contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::write(&temp_path, e));
    }
    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::write(&path, e));
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote schema file");
    Ok(path)
}
