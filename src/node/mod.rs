//! Node model
//!
//! The typed-node representation produced by the analyzer: one
//! [`SchemaNode`] per field or type, shaped as a [`NodeKind`], with its
//! identifier-safe names derived at construction.

mod naming;
mod types;

pub use naming::{field_name, method_name, LegalNames};
pub use types::{NodeKind, SchemaNode};
