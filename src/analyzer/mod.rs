//! Schema analyzer
//!
//! Turns one annotated JSON value into a [`SchemaNode`](crate::node::SchemaNode)
//! tree.
//!
//! # Meta keys
//!
//! - `:class` names the object's type (default: the field name)
//! - `:isOutputStruct: false` opts an object out of its plain-data companion
//! - `<field>:type` forces a field's type regardless of its example value
//!
//! Arrays must be homogeneous; a mismatch fails the analysis with the path
//! of the offending element.

#[allow(clippy::module_inception)]
mod analyzer;

pub use analyzer::SchemaAnalyzer;

#[cfg(test)]
mod tests;
