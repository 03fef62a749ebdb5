//! Loader types
//!
//! Input document model for JSON parsing.

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

// ============================================================================
// Schema Document
// ============================================================================

/// One input definition: example request/response values plus the metadata
/// the emitters use for placement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchemaDocument {
    /// Document name, taken from the file stem
    #[serde(skip)]
    pub name: String,
    /// Example request value
    #[serde(default)]
    pub request: Option<JsonValue>,
    /// Example response value
    #[serde(default)]
    pub response: Option<JsonValue>,
    /// Enclosing scopes of the generated types
    #[serde(default)]
    pub namespace: Namespace,
    /// Shared header type referenced by this operation
    #[serde(default)]
    pub common_header: Option<String>,
    /// Emission priority across documents
    #[serde(default)]
    pub priority: Priority,
}

impl SchemaDocument {
    /// Attach a name to a parsed document
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Request value, treating an explicit `null` as absent
    pub fn request(&self) -> Option<&JsonValue> {
        self.request.as_ref().filter(|value| !value.is_null())
    }

    /// Response value, treating an explicit `null` as absent
    pub fn response(&self) -> Option<&JsonValue> {
        self.response.as_ref().filter(|value| !value.is_null())
    }
}

// ============================================================================
// Namespace
// ============================================================================

/// A single scope name or a list of nested scope names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Namespace {
    Single(String),
    Nested(Vec<String>),
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::Nested(Vec::new())
    }
}

impl Namespace {
    /// Scope names from outermost to innermost, empty names dropped
    pub fn segments(&self) -> Vec<&str> {
        let names: Vec<&str> = match self {
            Namespace::Single(name) => vec![name.as_str()],
            Namespace::Nested(names) => names.iter().map(String::as_str).collect(),
        };
        names.into_iter().filter(|name| !name.is_empty()).collect()
    }

    /// Scope names joined with a separator, e.g. `a::b`
    pub fn joined(&self, separator: &str) -> String {
        self.segments().join(separator)
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }
}

// ============================================================================
// Priority
// ============================================================================

/// Emission priority; only `high` is distinguished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    #[serde(other)]
    Normal,
}

impl Priority {
    pub fn is_high(self) -> bool {
        self == Priority::High
    }
}
