//! Process-wide type registry

use crate::error::{Error, Result};
use crate::resolver::TypeName;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// One field of a registered type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub type_name: TypeName,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
        }
    }
}

/// Type name → ordered field list, in first-seen order
///
/// Every name is appended once, after all the types its fields refer to.
/// A field may refer to a type that is not registered yet; registering that
/// type later is an error, since it would follow its user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    types: IndexMap<String, Vec<FieldDef>>,
    /// Unregistered type → first registered type referring to it
    #[serde(skip)]
    pending: IndexMap<String, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a type definition
    ///
    /// Returns `true` when the name is new. A repeated name with the same
    /// fields is a no-op; with different fields it is an error.
    pub fn register(&mut self, type_name: &str, fields: Vec<FieldDef>) -> Result<bool> {
        match self.types.get(type_name) {
            Some(existing) if *existing == fields => Ok(false),
            Some(existing) => Err(Error::ConflictingTypeDefinition {
                type_name: type_name.to_string(),
                existing: render_fields(existing),
                incoming: render_fields(&fields),
            }),
            None => {
                if let Some(referenced_by) = self.pending.get(type_name) {
                    return Err(Error::ForwardReference {
                        type_name: type_name.to_string(),
                        referenced_by: referenced_by.clone(),
                    });
                }
                debug!("register {type_name} ({} fields)", fields.len());
                self.types.insert(type_name.to_string(), fields);
                self.track_references(type_name);
                Ok(true)
            }
        }
    }

    /// Remember referenced types that are not registered yet
    fn track_references(&mut self, type_name: &str) {
        let Some(fields) = self.types.get(type_name) else {
            return;
        };
        for referenced in fields.iter().filter_map(|f| f.type_name.referenced_object()) {
            if !self.types.contains_key(referenced) && !self.pending.contains_key(referenced) {
                debug!("{type_name} refers to {referenced}, not registered yet");
                self.pending
                    .insert(referenced.to_string(), type_name.to_string());
            }
        }
    }

    /// Referenced type names that have no definition yet
    pub fn unresolved_references(&self) -> impl Iterator<Item = &str> {
        self.pending.keys().map(String::as_str)
    }

    pub fn get(&self, type_name: &str) -> Option<&[FieldDef]> {
        self.types.get(type_name).map(Vec::as_slice)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Index of a type name in registration order
    pub fn position(&self, type_name: &str) -> Option<usize> {
        self.types.get_index_of(type_name)
    }

    /// Type names in registration order
    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldDef])> {
        self.types
            .iter()
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn render_fields(fields: &[FieldDef]) -> String {
    fields
        .iter()
        .map(|field| format!("{}: {}", field.name, field.type_name))
        .collect::<Vec<_>>()
        .join(", ")
}
