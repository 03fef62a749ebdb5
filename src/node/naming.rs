//! Identifier legalization

use crate::config::NamingConfig;
use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;

/// Identifier-safe forms of a field key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LegalNames {
    /// UpperCamel form used for accessor names
    pub method_name: String,
    /// lower_snake form used for member names
    pub field_name: String,
}

impl LegalNames {
    pub fn new(name: &str, naming: &NamingConfig) -> Self {
        Self {
            method_name: method_name(name),
            field_name: field_name(name, naming),
        }
    }
}

/// `foo-bar` → `FooBar`, `fooBar` → `FooBar`
pub fn method_name(name: &str) -> String {
    name.replace('-', "_").to_upper_camel_case()
}

/// `foo-bar` → `foo_bar`, `FooBar` → `foo_bar`
///
/// Names in the reserved set get the configured marker appended.
pub fn field_name(name: &str, naming: &NamingConfig) -> String {
    let mut field = name.replace('-', "_").to_snake_case();
    if naming.is_reserved(&field) {
        field.push_str(&naming.reserved_marker);
    }
    field
}
