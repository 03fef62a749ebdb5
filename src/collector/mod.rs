//! Type graph collector
//!
//! Flattens analyzed trees into the shared [`TypeRegistry`] and into
//! per-document emission lists.
//!
//! # Ordering
//!
//! Both walks are post-order: an object's nested object and array fields
//! are visited before the object itself, so every type appears after the
//! types it refers to.
//!
//! # Error type
//!
//! The configured base error type is registered under the canonical error
//! name, without its suppressed pseudo-fields.

#[allow(clippy::module_inception)]
mod collector;
mod registry;

pub use collector::{emission_list, plain_struct_list, TypeGraphCollector};
pub use registry::{FieldDef, TypeRegistry};
