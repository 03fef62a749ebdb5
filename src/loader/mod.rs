//! Document loader module
//!
//! Parse schema documents from JSON files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `SchemaDocument` - Example request/response pair with its metadata
//! - `Namespace` / `Priority` - Placement hints for emitters
//! - JSON parsing that keeps object key order

mod parser;
mod types;

pub use parser::{load_document, load_document_from_str, load_documents, load_inputs};
pub use types::{Namespace, Priority, SchemaDocument};
