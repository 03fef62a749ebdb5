//! JSON parser for schema documents
//!
//! Reads one document from a string or file, or every `*.json` file in a
//! directory in file-name order.

use crate::error::{Error, Result};
use crate::loader::types::SchemaDocument;
use crate::types::JsonValue;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DOCUMENT_EXTENSION: &str = "json";

/// Load a schema document from a JSON string
pub fn load_document_from_str(json: &str) -> Result<SchemaDocument> {
    let value: JsonValue = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(Error::invalid_document(format!(
            "expected a JSON object at the top level, found {}",
            kind_of(&value)
        )));
    }
    let document = serde_json::from_value(value)?;
    Ok(document)
}

/// Load a schema document from a file, named after the file stem
pub fn load_document(path: impl AsRef<Path>) -> Result<SchemaDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read document '{}': {e}",
                path.display()
            ))
        }
    })?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document = load_document_from_str(&content)
        .map_err(|e| Error::invalid_document(format!("{}: {e}", path.display())))?;
    debug!("loaded document '{name}' from {}", path.display());
    Ok(document.with_name(name))
}

/// Load every `*.json` document in a directory, sorted by file name
pub fn load_documents(dir: impl AsRef<Path>) -> Result<Vec<SchemaDocument>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::FileNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        })
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    paths.iter().map(load_document).collect()
}

/// Load documents from a mix of files and directories, in argument order
pub fn load_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<SchemaDocument>> {
    let mut documents = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            documents.extend(load_documents(input)?);
        } else {
            documents.push(load_document(input)?);
        }
    }
    Ok(documents)
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
