//! Schema node types

use super::naming::LegalNames;
use crate::config::NamingConfig;
use crate::resolver::{storage_of, storage_with, StorageType, TypeName};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Shape of a node
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum NodeKind {
    /// Scalar, unresolved placeholder, or reference to an object type
    /// defined elsewhere
    #[default]
    Leaf,
    /// Object type definition, fields in document order
    Object { fields: IndexMap<String, SchemaNode> },
    /// List of scalars; the element is absent when no example was given
    ArrayOfScalar { element: Option<Box<SchemaNode>> },
    /// List of objects; the element is the representative object node
    ArrayOfObject { element: Option<Box<SchemaNode>> },
}

/// One analyzed field or composite type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaNode {
    /// Original field key, empty for placeholders
    pub name: String,

    #[serde(flatten)]
    pub names: LegalNames,

    pub type_name: TypeName,

    /// Plain-data counterpart of `type_name`
    pub storage_type: StorageType,

    /// Literal taken from the input document
    #[serde(skip_serializing_if = "Value::is_null")]
    pub example: Value,

    /// Enclosing object's type name, empty at the root
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner_type: String,

    /// Whether an object type also needs its plain-data companion
    pub emit_plain_struct: bool,

    pub kind: NodeKind,
}

impl SchemaNode {
    /// Create a leaf node
    pub fn new(
        name: &str,
        type_name: TypeName,
        example: Value,
        owner_type: &str,
        naming: &NamingConfig,
    ) -> Self {
        let storage_type = storage_of(&type_name);
        Self {
            name: name.to_string(),
            names: LegalNames::new(name, naming),
            type_name,
            storage_type,
            example,
            owner_type: owner_type.to_string(),
            emit_plain_struct: true,
            kind: NodeKind::Leaf,
        }
    }

    /// Create an unresolved placeholder leaf
    pub fn placeholder(name: &str, example: Value, naming: &NamingConfig) -> Self {
        Self::new(name, TypeName::Unresolved, example, "", naming)
    }

    #[must_use]
    pub fn with_plain_struct(mut self, emit_plain_struct: bool) -> Self {
        self.emit_plain_struct = emit_plain_struct;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the type name and re-derive the storage type
    pub fn set_type(&mut self, type_name: TypeName) {
        self.storage_type = storage_of(&type_name);
        self.type_name = type_name;
    }

    /// Set the type name with an explicit storage type
    ///
    /// Composite descriptors still re-derive their storage type.
    pub fn set_type_and_storage(&mut self, type_name: TypeName, storage_type: StorageType) {
        self.storage_type = storage_with(&type_name, storage_type);
        self.type_name = type_name;
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, NodeKind::Object { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::ArrayOfScalar { .. } | NodeKind::ArrayOfObject { .. }
        )
    }

    /// Object fields, empty for every other shape
    pub fn fields(&self) -> impl Iterator<Item = &SchemaNode> {
        let fields = match &self.kind {
            NodeKind::Object { fields } => Some(fields.values()),
            _ => None,
        };
        fields.into_iter().flatten()
    }

    pub fn field(&self, key: &str) -> Option<&SchemaNode> {
        match &self.kind {
            NodeKind::Object { fields } => fields.get(key),
            _ => None,
        }
    }

    /// Representative element of an array node
    pub fn element(&self) -> Option<&SchemaNode> {
        match &self.kind {
            NodeKind::ArrayOfScalar { element } | NodeKind::ArrayOfObject { element } => {
                element.as_deref()
            }
            _ => None,
        }
    }

    /// Short operation name derived from a `...Request` / `...Response`
    /// type name
    ///
    /// `None` when the name has neither suffix, when the prefix is empty, or
    /// when the prefix is the error marker.
    pub fn function_name(&self, error_marker: &str) -> Option<String> {
        let type_name = match &self.type_name {
            TypeName::Object(name) => name.as_str(),
            _ => return None,
        };
        let prefix = type_name
            .find("Request")
            .or_else(|| type_name.find("Response"))
            .map(|index| &type_name[..index])?;
        if prefix.is_empty() || prefix == error_marker {
            return None;
        }
        Some(prefix.to_string())
    }
}
