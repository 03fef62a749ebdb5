//! Type resolution from JSON values and explicit annotations

use super::types::{ScalarType, StorageType, TypeName, PLAIN_SUFFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LIST_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(ListOfScalar|JsonValueVector|ListOfObject|JsonObjectVector)\s*<\s*([^,<>]+?)\s*(?:,\s*([^,<>]+?)\s*)?>$",
    )
    .expect("list annotation pattern is valid")
});

static TYPE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("identifier pattern is valid")
});

/// Plain-data companion name of a class type
pub fn plain_of(type_name: &str) -> String {
    format!("{type_name}{PLAIN_SUFFIX}")
}

/// Scalar kind of a JSON literal, if it is one
pub fn scalar_of(value: &Value) -> Option<ScalarType> {
    match value {
        Value::String(_) => Some(ScalarType::String),
        Value::Number(_) => Some(ScalarType::Integer64),
        Value::Bool(_) => Some(ScalarType::Boolean),
        _ => None,
    }
}

/// Provisional type of a literal from its JSON kind alone
///
/// Objects, arrays and null have no type until their contents are walked.
pub fn provisional_type(value: &Value) -> TypeName {
    scalar_of(value).map_or(TypeName::Unresolved, TypeName::Scalar)
}

/// Composite list type for an already resolved element type
///
/// Returns `None` when the element cannot form a list: unresolved
/// placeholders and nested lists.
pub fn list_of(element: &TypeName) -> Option<TypeName> {
    match element {
        TypeName::Scalar(scalar) => Some(TypeName::ListOfScalar(*scalar)),
        TypeName::Object(name) => Some(TypeName::ListOfObject(name.clone())),
        _ => None,
    }
}

/// Default storage type derived from a type name
pub fn storage_of(type_name: &TypeName) -> StorageType {
    match type_name {
        TypeName::Unresolved => StorageType::Unresolved,
        TypeName::Scalar(scalar) => StorageType::Scalar(*scalar),
        TypeName::Object(name) => StorageType::Struct(plain_of(name)),
        TypeName::ListOfScalar(scalar) => StorageType::List(Box::new(StorageType::Scalar(*scalar))),
        TypeName::ListOfObject(name) => {
            StorageType::List(Box::new(StorageType::Struct(plain_of(name))))
        }
    }
}

/// Storage type for a type name with a caller-supplied storage type
///
/// Composite descriptors always re-derive their storage; anything else keeps
/// the explicit one.
pub fn storage_with(type_name: &TypeName, explicit: StorageType) -> StorageType {
    if type_name.is_composite() {
        storage_of(type_name)
    } else {
        explicit
    }
}

/// Parse an explicit `<field>:type` annotation
///
/// Accepts composite descriptors (`ListOfScalar<T>`, `ListOfObject<T, S>`
/// and their `JsonValueVector` / `JsonObjectVector` spellings), scalar
/// names, and otherwise an object type name.
pub fn parse_annotation(annotation: &str) -> Result<TypeName, String> {
    let text = annotation.trim();
    if text.is_empty() {
        return Err("annotation is empty".to_string());
    }

    if let Some(caps) = LIST_ANNOTATION.captures(text) {
        let element = &caps[2];
        return match &caps[1] {
            "ListOfScalar" | "JsonValueVector" => {
                if caps.get(3).is_some() {
                    return Err("scalar lists take a single type argument".to_string());
                }
                ScalarType::from_name(element)
                    .map(TypeName::ListOfScalar)
                    .ok_or_else(|| format!("'{element}' is not a scalar type"))
            }
            _ => {
                if ScalarType::from_name(element).is_some() {
                    return Err(format!("'{element}' is a scalar, use ListOfScalar"));
                }
                if !TYPE_IDENTIFIER.is_match(element) {
                    return Err(format!("'{element}' is not a valid type name"));
                }
                if let Some(companion) = caps.get(3) {
                    if companion.as_str() != plain_of(element) {
                        tracing::debug!(
                            "ignoring companion '{}' in '{text}', using '{}'",
                            companion.as_str(),
                            plain_of(element)
                        );
                    }
                }
                Ok(TypeName::ListOfObject(element.to_string()))
            }
        };
    }

    if text.contains('<') || text.contains('>') {
        return Err("unknown generic type".to_string());
    }

    if let Some(scalar) = ScalarType::from_name(text) {
        return Ok(TypeName::Scalar(scalar));
    }

    if TYPE_IDENTIFIER.is_match(text) {
        Ok(TypeName::Object(text.to_string()))
    } else {
        Err(format!("'{text}' is not a valid type name"))
    }
}
