//! Common types used throughout jsonmap
//!
//! Shared aliases, the meta-key vocabulary of input documents, and the
//! field path used to locate problems inside a document.

use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Meta Keys
// ============================================================================

/// Overrides the inferred type name of the enclosing object
pub const CLASS_KEY: &str = ":class";

/// Opts an object out of its plain-data companion type
pub const OUTPUT_STRUCT_KEY: &str = ":isOutputStruct";

/// Suffix of a per-field explicit type annotation (`<field>:type`)
pub const TYPE_SUFFIX: &str = ":type";

/// Any key containing this character is a meta key, never a field
pub const META_MARKER: char = ':';

/// Whether a key is a meta key rather than a field
pub fn is_meta_key(key: &str) -> bool {
    key.contains(META_MARKER)
}

// ============================================================================
// Field Path
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a document, rendered as `root.items[1].name`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Create a path starting at the given field name
    pub fn new(root: &str) -> Self {
        let mut path = Self::default();
        path.push_key(root);
        path
    }

    pub fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
