//! Document set aggregator
//!
//! Runs the analyzer and collector over every document in input order and
//! merges their types into one [`TypeModel`]. Registry order is first-seen
//! order, so the document order decides the output order.

#[allow(clippy::module_inception)]
mod aggregator;

pub use aggregator::{AnalyzedDocument, DocumentSetAggregator, TypeModel};
