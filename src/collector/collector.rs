//! Post-order flattening of analyzed trees

use super::registry::{FieldDef, TypeRegistry};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::node::{NodeKind, SchemaNode};
use crate::resolver::{self, TypeName};
use crate::types::FieldPath;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::warn;

/// Registers the object types of analyzed trees, children before parents
#[derive(Debug)]
pub struct TypeGraphCollector<'a> {
    config: &'a GeneratorConfig,
    registry: &'a mut TypeRegistry,
}

impl<'a> TypeGraphCollector<'a> {
    pub fn new(config: &'a GeneratorConfig, registry: &'a mut TypeRegistry) -> Self {
        Self { config, registry }
    }

    /// Register every object type reachable from `root`
    ///
    /// Returns the type the root contributes as a field type.
    pub fn collect(&mut self, root: &SchemaNode) -> Result<TypeName> {
        let mut path = FieldPath::new(&root.name);
        self.collect_node(root, &mut path)
    }

    fn collect_node(&mut self, node: &SchemaNode, path: &mut FieldPath) -> Result<TypeName> {
        match &node.kind {
            NodeKind::Leaf => {
                if node.type_name.is_unresolved() {
                    warn!("{path}: type could not be resolved");
                }
                Ok(node.type_name.clone())
            }
            // the descriptor already names the element type
            NodeKind::ArrayOfScalar { .. } => Ok(node.type_name.clone()),
            NodeKind::ArrayOfObject { element: None } => Err(Error::MissingElement {
                path: path.to_string(),
                type_name: node.type_name.to_string(),
            }),
            NodeKind::ArrayOfObject {
                element: Some(element),
            } => {
                path.push_index(0);
                let element_type = self.collect_node(element, path)?;
                path.pop();
                Ok(resolver::list_of(&element_type).unwrap_or_else(|| node.type_name.clone()))
            }
            NodeKind::Object { fields } => self.collect_object(node, fields, path),
        }
    }

    fn collect_object(
        &mut self,
        node: &SchemaNode,
        fields: &IndexMap<String, SchemaNode>,
        path: &mut FieldPath,
    ) -> Result<TypeName> {
        let config = self.config;
        let errors = &config.errors;
        let class = node.type_name.to_string();
        let is_base_error = errors.is_base_type(&class);
        let registered = if is_base_error {
            errors.canonical_type.clone()
        } else {
            class
        };

        let mut defs = Vec::with_capacity(fields.len());
        for field in fields.values() {
            path.push_key(&field.name);
            let field_type = self.collect_node(field, path)?;
            path.pop();
            if is_base_error && errors.is_suppressed(&field.name) {
                continue;
            }
            defs.push(FieldDef::new(field.name.clone(), field_type));
        }

        self.registry.register(&registered, defs)?;
        Ok(TypeName::Object(registered))
    }
}

/// Object types of one document, dependency-ordered and deduplicated by
/// type name
///
/// Arrays never appear themselves; their element type does.
pub fn emission_list<'n>(roots: impl IntoIterator<Item = &'n SchemaNode>) -> Vec<&'n SchemaNode> {
    let mut ordered = Vec::new();
    for root in roots {
        push_post_order(root, &mut ordered);
    }
    let mut seen = HashSet::new();
    ordered.retain(|node| seen.insert(node.type_name.to_string()));
    ordered
}

fn push_post_order<'n>(node: &'n SchemaNode, out: &mut Vec<&'n SchemaNode>) {
    match &node.kind {
        NodeKind::Object { fields } => {
            for field in fields.values() {
                if field.is_object() || field.is_array() {
                    push_post_order(field, out);
                }
            }
            out.push(node);
        }
        NodeKind::ArrayOfScalar { element } | NodeKind::ArrayOfObject { element } => {
            if let Some(element) = element {
                push_post_order(element, out);
            }
        }
        NodeKind::Leaf => {}
    }
}

/// Emission list entries that need a plain-data companion, deduplicated by
/// storage type
pub fn plain_struct_list<'n>(
    roots: impl IntoIterator<Item = &'n SchemaNode>,
) -> Vec<&'n SchemaNode> {
    let mut seen = HashSet::new();
    emission_list(roots)
        .into_iter()
        .filter(|node| node.emit_plain_struct)
        .filter(|node| seen.insert(node.storage_type.to_string()))
        .collect()
}
