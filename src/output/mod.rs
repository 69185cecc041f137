//! Output module
//!
//! Handles writing generated schema documents to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Creating the output directory, intermediate directories included
//! - Rendering a document as compact or pretty JSON
//! - Writing `<event>_schema.json` atomically

mod writer;

pub use writer::{ensure_output_dir, render, write_schema, SchemaWriter};
