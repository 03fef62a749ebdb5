// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # jsonmap
//!
//! Schema inference and type-graph building from annotated JSON examples.
//!
//! Each input document carries an example `request` and `response` value.
//! Objects may name their type with `:class`, opt out of a plain-data
//! companion with `:isOutputStruct`, and pin a field's type with a
//! `<field>:type` annotation. The result is one [`TypeModel`]: every
//! distinct object type with its ordered fields, dependency-ordered and
//! shared across all documents, plus the analyzed trees per document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jsonmap::{load_documents, DocumentSetAggregator, GeneratorConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = GeneratorConfig::default();
//!     let documents = load_documents("schemas/")?;
//!     let model = DocumentSetAggregator::new(&config).run(&documents)?;
//!
//!     for (type_name, fields) in model.registry.iter() {
//!         println!("{type_name}: {} fields", fields.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌─────────────┐   ┌────────────┐
//! │   Loader   │ → │  Analyzer  │ → │  Collector  │ → │ Aggregator │
//! │ JSON files │   │ node trees │   │  registry   │   │ TypeModel  │
//! └────────────┘   └─────┬──────┘   └─────────────┘   └────────────┘
//!                        │
//!                  ┌─────┴──────┐
//!                  │  Resolver  │  scalar / object / list types
//!                  └────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and meta-key constants
pub mod types;

/// Generator configuration
pub mod config;

/// Schema nodes and identifier legalization
pub mod node;

/// Type names, storage types and annotation parsing
pub mod resolver;

/// JSON value to schema node trees
pub mod analyzer;

/// Type registry and emission lists
pub mod collector;

/// Document set aggregation
pub mod aggregate;

/// JSON loader for schema documents
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use aggregate::{AnalyzedDocument, DocumentSetAggregator, TypeModel};
pub use analyzer::SchemaAnalyzer;
pub use collector::{FieldDef, TypeGraphCollector, TypeRegistry};
pub use config::GeneratorConfig;
pub use loader::{load_document, load_document_from_str, load_documents, SchemaDocument};
pub use node::{NodeKind, SchemaNode};
pub use resolver::{ScalarType, StorageType, TypeName};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
