//! Recursive descent from JSON values to schema node trees

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::node::{NodeKind, SchemaNode};
use crate::resolver::{self, TypeName};
use crate::types::{
    is_meta_key, FieldPath, JsonObject, CLASS_KEY, META_MARKER, OUTPUT_STRUCT_KEY, TYPE_SUFFIX,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Builds schema node trees from annotated JSON values
#[derive(Debug, Clone)]
pub struct SchemaAnalyzer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SchemaAnalyzer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Analyze a value under the given field name
    pub fn analyze(&self, value: &Value, name: &str) -> Result<SchemaNode> {
        let mut path = FieldPath::new(name);
        self.analyze_value(value, name, &mut path)
    }

    /// Analyze a value under the configured root name
    pub fn analyze_root(&self, value: &Value) -> Result<SchemaNode> {
        self.analyze(value, &self.config.root_name)
    }

    fn analyze_value(&self, value: &Value, name: &str, path: &mut FieldPath) -> Result<SchemaNode> {
        let naming = &self.config.naming;
        match value {
            Value::Null => Ok(SchemaNode::placeholder(name, Value::Null, naming)),
            // nothing to infer from; resolved by the caller, like an empty array
            Value::Object(map) if map.is_empty() => {
                Ok(SchemaNode::placeholder(name, value.clone(), naming))
            }
            Value::Array(items) => self.analyze_array(items, name, path),
            Value::Object(map) => self.analyze_object(map, name, path),
            scalar => Ok(SchemaNode::new(
                name,
                resolver::provisional_type(scalar),
                scalar.clone(),
                "",
                naming,
            )),
        }
    }

    /// Every element must resolve to the same type; the first one stands in
    /// for all of them.
    fn analyze_array(&self, items: &[Value], name: &str, path: &mut FieldPath) -> Result<SchemaNode> {
        let mut representative: Option<SchemaNode> = None;
        for (index, item) in items.iter().enumerate() {
            path.push_index(index);
            let element = self.analyze_value(item, name, path)?;
            if let Some(first) = &representative {
                if let Err(e) = check_same_shape(first, &element, path) {
                    warn!("{e}");
                    return Err(e);
                }
            } else {
                representative = Some(element);
            }
            path.pop();
        }

        let naming = &self.config.naming;
        let example = Value::Array(items.to_vec());
        let Some(element) = representative else {
            // resolved by the caller from an explicit annotation, if any
            return Ok(SchemaNode::placeholder(name, example, naming));
        };
        if element.is_array() || element.type_name.is_composite() {
            return Err(Error::NestedArray {
                path: path.to_string(),
            });
        }
        let Some(list_type) = resolver::list_of(&element.type_name) else {
            debug!("{path}: no element type could be resolved");
            return Ok(SchemaNode::placeholder(name, example, naming));
        };
        debug!("{path}: list type {list_type}");

        let element = Some(Box::new(element));
        let kind = match list_type {
            TypeName::ListOfScalar(_) => NodeKind::ArrayOfScalar { element },
            _ => NodeKind::ArrayOfObject { element },
        };
        Ok(SchemaNode::new(name, list_type, example, "", naming).with_kind(kind))
    }

    /// Two passes: explicit `<field>:type` annotations first, then the
    /// ordinary keys in document order.
    fn analyze_object(&self, map: &JsonObject, name: &str, path: &mut FieldPath) -> Result<SchemaNode> {
        let class_name = match map.get(CLASS_KEY) {
            None => name.to_string(),
            Some(Value::String(class)) if !class.is_empty() => class.clone(),
            Some(_) => {
                return Err(Error::meta_key(
                    path.to_string(),
                    CLASS_KEY,
                    "expected a non-empty string",
                ))
            }
        };
        let emit_plain_struct = match map.get(OUTPUT_STRUCT_KEY) {
            None => true,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                return Err(Error::meta_key(
                    path.to_string(),
                    OUTPUT_STRUCT_KEY,
                    "expected a boolean",
                ))
            }
        };
        debug!("{path}: class {class_name}, plain struct {emit_plain_struct}");

        let annotations = self.read_annotations(map, path)?;

        let mut fields = IndexMap::new();
        for (key, value) in map.iter().filter(|(key, _)| !is_meta_key(key)) {
            path.push_key(key);
            let discovered = self.analyze_value(value, key, path)?;
            let field = match annotations.get(key.as_str()) {
                Some(annotated) => self.annotated_field(
                    key,
                    annotated.clone(),
                    value,
                    discovered,
                    &class_name,
                    emit_plain_struct,
                    path,
                ),
                None => self.inferred_field(key, value, discovered, &class_name),
            };
            path.pop();
            fields.insert(key.clone(), field);
        }

        for key in annotations.keys().filter(|key| !fields.contains_key(**key)) {
            debug!("{path}: annotation for '{key}' has no example value, ignored");
        }

        Ok(SchemaNode::new(
            name,
            TypeName::object(class_name),
            Value::Null,
            "",
            &self.config.naming,
        )
        .with_plain_struct(emit_plain_struct)
        .with_kind(NodeKind::Object { fields }))
    }

    /// First pass: collect explicit type annotations keyed by field name
    fn read_annotations<'m>(
        &self,
        map: &'m JsonObject,
        path: &FieldPath,
    ) -> Result<IndexMap<&'m str, TypeName>> {
        let mut annotations = IndexMap::new();
        for (key, value) in map {
            let Some(stripped) = key.strip_suffix(TYPE_SUFFIX) else {
                if is_meta_key(key) && key != CLASS_KEY && key != OUTPUT_STRUCT_KEY {
                    debug!("{path}: unknown meta key '{key}' ignored");
                }
                continue;
            };
            let field = stripped.split(META_MARKER).next().unwrap_or_default();
            if field.is_empty() {
                return Err(Error::meta_key(
                    path.to_string(),
                    key.as_str(),
                    "annotation has no field name",
                ));
            }
            let Value::String(annotation) = value else {
                return Err(Error::meta_key(
                    path.to_string(),
                    key.as_str(),
                    "expected a type name string",
                ));
            };
            let type_name = resolver::parse_annotation(annotation).map_err(|message| {
                Error::annotation(format!("{path}.{field}"), annotation.as_str(), message)
            })?;
            debug!("{path}: annotation {field} -> {type_name}");
            annotations.insert(field, type_name);
        }
        Ok(annotations)
    }

    /// Field without annotation: provisional guess from the literal, then
    /// whatever the recursive walk discovered
    fn inferred_field(
        &self,
        key: &str,
        value: &Value,
        discovered: SchemaNode,
        owner: &str,
    ) -> SchemaNode {
        let mut field = SchemaNode::new(
            key,
            resolver::provisional_type(value),
            value.clone(),
            owner,
            &self.config.naming,
        );
        if field.type_name.is_unresolved() {
            field.set_type_and_storage(discovered.type_name, discovered.storage_type);
            field.emit_plain_struct = discovered.emit_plain_struct;
        }
        field.kind = discovered.kind;
        field
    }

    /// Field with annotation: the annotation wins over the literal's kind,
    /// the walk still supplies nested fields and list elements
    #[allow(clippy::too_many_arguments)]
    fn annotated_field(
        &self,
        key: &str,
        annotated: TypeName,
        value: &Value,
        discovered: SchemaNode,
        owner: &str,
        owner_plain_struct: bool,
        path: &FieldPath,
    ) -> SchemaNode {
        let kind = match &annotated {
            TypeName::Unresolved | TypeName::Scalar(_) => {
                if !matches!(discovered.kind, NodeKind::Leaf) {
                    warn!("{path}: annotated as {annotated}, nested structure discarded");
                }
                NodeKind::Leaf
            }
            TypeName::Object(_) => match discovered.kind {
                NodeKind::Object { fields } => NodeKind::Object { fields },
                NodeKind::Leaf => NodeKind::Leaf,
                _ => {
                    warn!("{path}: annotated as {annotated}, list example discarded");
                    NodeKind::Leaf
                }
            },
            TypeName::ListOfScalar(scalar) => {
                let element = match discovered.kind {
                    NodeKind::ArrayOfScalar { element } => element.map(|mut element| {
                        element.set_type(TypeName::Scalar(*scalar));
                        element
                    }),
                    _ => None,
                };
                NodeKind::ArrayOfScalar { element }
            }
            TypeName::ListOfObject(class) => {
                let element = match discovered.kind {
                    NodeKind::ArrayOfObject { element } => element.map(|mut element| {
                        element.set_type(TypeName::object(class.as_str()));
                        element
                    }),
                    _ => None,
                };
                NodeKind::ArrayOfObject { element }
            }
        };

        let emit_plain_struct = match &kind {
            NodeKind::Object { .. } => discovered.emit_plain_struct,
            _ => owner_plain_struct,
        };
        SchemaNode::new(key, annotated, value.clone(), owner, &self.config.naming)
            .with_plain_struct(emit_plain_struct)
            .with_kind(kind)
    }
}

/// Array elements must agree on type and, for objects, on every field
/// recursively
fn check_same_shape(expected: &SchemaNode, found: &SchemaNode, path: &mut FieldPath) -> Result<()> {
    let mismatch = |path: &FieldPath, expected: String, found: String| {
        Err(Error::InconsistentElementTypes {
            path: path.to_string(),
            expected,
            found,
        })
    };
    if expected.type_name != found.type_name {
        return mismatch(
            path,
            expected.type_name.to_string(),
            found.type_name.to_string(),
        );
    }

    match (&expected.kind, &found.kind) {
        (NodeKind::Object { fields: left }, NodeKind::Object { fields: right }) => {
            if !left.keys().eq(right.keys()) {
                return mismatch(path, describe_object(expected), describe_object(found));
            }
            for (key, field) in left {
                if let Some(other) = right.get(key) {
                    path.push_key(key);
                    check_same_shape(field, other, path)?;
                    path.pop();
                }
            }
            Ok(())
        }
        (
            NodeKind::ArrayOfScalar { element: Some(left) },
            NodeKind::ArrayOfScalar { element: Some(right) },
        )
        | (
            NodeKind::ArrayOfObject { element: Some(left) },
            NodeKind::ArrayOfObject { element: Some(right) },
        ) => {
            path.push_index(0);
            check_same_shape(left, right, path)?;
            path.pop();
            Ok(())
        }
        _ => Ok(()),
    }
}

/// `Item{a: integer64, b: string}`
fn describe_object(node: &SchemaNode) -> String {
    let fields: Vec<String> = node
        .fields()
        .map(|field| format!("{}: {}", field.name, field.type_name))
        .collect();
    format!("{}{{{}}}", node.type_name, fields.join(", "))
}
