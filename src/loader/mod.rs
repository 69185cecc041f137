//! JSON document loader
//!
//! Reads sample and template documents from disk.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_json` - Read and parse a JSON file
//! - `load_json_from_str` - Parse JSON text, attributing errors to a path
//! - Parse errors that carry the file path, line and column

mod parser;

pub use parser::{load_json, load_json_from_str};
