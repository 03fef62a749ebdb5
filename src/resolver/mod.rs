//! Type resolver
//!
//! Maps JSON values and explicit annotations to semantic types, and
//! synthesizes composite list type names.
//!
//! # Features
//!
//! - **Scalar mapping**: string, number and boolean literals
//! - **Composite types**: `ListOfScalar<T>` and `ListOfObject<T, TStruct>`
//! - **Storage types**: plain-data counterparts of every type name
//! - **Annotations**: parsing of `<field>:type` overrides
//!
//! The resolver is pure; walking JSON trees is the analyzer's job.

mod resolve;
mod types;

pub use resolve::{
    list_of, parse_annotation, plain_of, provisional_type, scalar_of, storage_of, storage_with,
};
pub use types::{ScalarType, StorageType, TypeName, PLAIN_SUFFIX};
