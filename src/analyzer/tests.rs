//! Schema analyzer tests

use super::*;
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::node::{NodeKind, SchemaNode};
use crate::resolver::{ScalarType, StorageType, TypeName};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn analyze(value: &Value) -> SchemaNode {
    let config = GeneratorConfig::default();
    SchemaAnalyzer::new(&config).analyze_root(value).unwrap()
}

fn analyze_err(value: &Value) -> Error {
    let config = GeneratorConfig::default();
    SchemaAnalyzer::new(&config).analyze_root(value).unwrap_err()
}

fn field_keys(node: &SchemaNode) -> Vec<&str> {
    node.fields().map(|field| field.name.as_str()).collect()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_scalar_leaves() {
    let root = analyze(&json!({"txid": "abcd", "vout": 1, "rbf": true}));

    let txid = root.field("txid").unwrap();
    assert_eq!(txid.type_name, TypeName::Scalar(ScalarType::String));
    assert_eq!(txid.example, json!("abcd"));
    assert_eq!(txid.owner_type, "root");
    assert_eq!(txid.kind, NodeKind::Leaf);

    assert_eq!(
        root.field("vout").unwrap().type_name,
        TypeName::Scalar(ScalarType::Integer64)
    );
    assert_eq!(
        root.field("rbf").unwrap().type_name,
        TypeName::Scalar(ScalarType::Boolean)
    );
}

#[test]
fn test_root_scalar() {
    let root = analyze(&json!("plain"));
    assert_eq!(root.name, "root");
    assert_eq!(root.type_name, TypeName::Scalar(ScalarType::String));
}

#[test]
fn test_null_is_placeholder() {
    let root = analyze(&json!({"memo": null}));
    let memo = root.field("memo").unwrap();
    assert!(memo.type_name.is_unresolved());
    assert_eq!(memo.kind, NodeKind::Leaf);
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn test_request_with_scalar_list() {
    let root = analyze(&json!({"id": "x", "tags": ["a", "b"]}));

    assert_eq!(root.type_name, TypeName::object("root"));
    assert!(root.is_object());
    assert_eq!(field_keys(&root), vec!["id", "tags"]);

    let id = root.field("id").unwrap();
    assert_eq!(id.type_name, TypeName::Scalar(ScalarType::String));

    let tags = root.field("tags").unwrap();
    assert_eq!(tags.type_name, TypeName::ListOfScalar(ScalarType::String));
    assert_eq!(tags.storage_type.to_string(), "List<string>");
    assert!(tags.is_array());
    let element = tags.element().unwrap();
    assert_eq!(element.type_name, TypeName::Scalar(ScalarType::String));
    assert_eq!(element.kind, NodeKind::Leaf);
}

#[test]
fn test_class_overrides_field_name() {
    let root = analyze(&json!({
        ":class": "CreateAddressRequest",
        "key": {":class": "PubkeyData", "hex": "02ab"},
        "network": {"name": "mainnet"}
    }));

    assert_eq!(root.type_name, TypeName::object("CreateAddressRequest"));
    assert_eq!(field_keys(&root), vec!["key", "network"]);

    let key = root.field("key").unwrap();
    assert_eq!(key.type_name, TypeName::object("PubkeyData"));
    assert_eq!(key.storage_type, StorageType::Struct("PubkeyDataStruct".to_string()));
    assert_eq!(key.owner_type, "CreateAddressRequest");
    assert!(key.is_object());
    assert_eq!(key.field("hex").unwrap().owner_type, "PubkeyData");

    // without :class the field key names the type
    assert_eq!(root.field("network").unwrap().type_name, TypeName::object("network"));
}

#[test]
fn test_output_struct_opt_out() {
    let root = analyze(&json!({
        ":class": "Outer",
        ":isOutputStruct": false,
        "inner": {":class": "Inner", ":isOutputStruct": false, "a": 1},
        "other": {":class": "Other", "b": 2}
    }));
    assert!(!root.emit_plain_struct);
    assert!(!root.field("inner").unwrap().emit_plain_struct);
    assert!(root.field("other").unwrap().emit_plain_struct);
}

#[test]
fn test_meta_keys_are_not_fields() {
    let root = analyze(&json!({
        ":class": "Foo",
        ":comment": "ignored",
        "amount:type": "uint32_t",
        "amount": 5
    }));
    assert_eq!(field_keys(&root), vec!["amount"]);
}

#[test]
fn test_invalid_meta_values() {
    assert!(matches!(
        analyze_err(&json!({":class": 5})),
        Error::InvalidMetaKey { .. }
    ));
    assert!(matches!(
        analyze_err(&json!({":isOutputStruct": "no"})),
        Error::InvalidMetaKey { .. }
    ));
    assert!(matches!(
        analyze_err(&json!({"a:type": 3, "a": 1})),
        Error::InvalidMetaKey { .. }
    ));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_list_of_objects() {
    let root = analyze(&json!({
        "txouts": [
            {":class": "TxOut", "address": "bc1q", "amount": 1000},
            {":class": "TxOut", "address": "bc1p", "amount": 2000}
        ]
    }));

    let txouts = root.field("txouts").unwrap();
    assert_eq!(txouts.type_name, TypeName::ListOfObject("TxOut".to_string()));
    assert_eq!(txouts.storage_type.to_string(), "List<TxOutStruct>");
    assert!(matches!(txouts.kind, NodeKind::ArrayOfObject { .. }));

    let element = txouts.element().unwrap();
    assert_eq!(element.type_name, TypeName::object("TxOut"));
    assert_eq!(field_keys(element), vec!["address", "amount"]);
    // the first element represents the list
    assert_eq!(element.field("address").unwrap().example, json!("bc1q"));
}

#[test]
fn test_heterogeneous_scalar_array_fails() {
    let err = analyze_err(&json!({"values": ["a", 1]}));
    match err {
        Error::InconsistentElementTypes {
            path,
            expected,
            found,
        } => {
            assert_eq!(path, "root.values[1]");
            assert_eq!(expected, "string");
            assert_eq!(found, "integer64");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_heterogeneous_object_array_fails() {
    let err = analyze_err(&json!({
        "items": [{":class": "A", "x": 1}, {":class": "B", "x": 1}]
    }));
    assert!(matches!(err, Error::InconsistentElementTypes { .. }));
}

#[test]
fn test_mixed_scalar_and_object_array_fails() {
    let err = analyze_err(&json!({"items": [{"x": 1}, "x"]}));
    assert!(matches!(err, Error::InconsistentElementTypes { .. }));
}

#[test]
fn test_nested_array_fails() {
    let err = analyze_err(&json!({"matrix": [[1, 2], [3]]}));
    match err {
        Error::NestedArray { path } => assert_eq!(path, "root.matrix"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_array_is_placeholder() {
    let root = analyze(&json!({"inputs": []}));
    let inputs = root.field("inputs").unwrap();
    assert!(inputs.type_name.is_unresolved());
    assert_eq!(inputs.kind, NodeKind::Leaf);
    assert_eq!(inputs.example, json!([]));
}

#[test]
fn test_empty_object_is_placeholder() {
    let root = analyze(&json!({"opts": {}}));
    let opts = root.field("opts").unwrap();
    assert!(opts.type_name.is_unresolved());
    assert_eq!(opts.kind, NodeKind::Leaf);
    assert_eq!(opts.example, json!({}));
}

#[test]
fn test_object_with_only_meta_keys_stays_object() {
    let root = analyze(&json!({"opts": {":class": "Options"}}));
    let opts = root.field("opts").unwrap();
    assert_eq!(opts.type_name, TypeName::object("Options"));
    assert!(opts.is_object());
    assert_eq!(opts.fields().count(), 0);
}

#[test]
fn test_object_array_with_different_fields_fails() {
    let err = analyze_err(&json!({
        "items": [{":class": "Item", "a": 1}, {":class": "Item", "b": "x"}]
    }));
    match err {
        Error::InconsistentElementTypes {
            path,
            expected,
            found,
        } => {
            assert_eq!(path, "root.items[1]");
            assert_eq!(expected, "Item{a: integer64}");
            assert_eq!(found, "Item{b: string}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_object_array_nested_mismatch_reports_field_path() {
    let err = analyze_err(&json!({
        "items": [
            {"script": {":class": "Script", "hex": "51"}},
            {"script": {":class": "Script", "hex": 81}}
        ]
    }));
    match err {
        Error::InconsistentElementTypes {
            path,
            expected,
            found,
        } => {
            assert_eq!(path, "root.items[1].script.hex");
            assert_eq!(expected, "string");
            assert_eq!(found, "integer64");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_object_array_with_same_fields_is_accepted() {
    let root = analyze(&json!({
        "items": [{"a": 1, "tags": ["x"]}, {"a": 2, "tags": ["y", "z"]}]
    }));
    let items = root.field("items").unwrap();
    assert_eq!(items.type_name, TypeName::ListOfObject("items".to_string()));
}

// ============================================================================
// Annotations
// ============================================================================

#[test]
fn test_annotation_precedence_over_literal() {
    let root = analyze(&json!({
        "amount:type": "uint32_t",
        "amount": 5,
        "flag:type": "string",
        "flag": true
    }));

    let amount = root.field("amount").unwrap();
    assert_eq!(amount.type_name, TypeName::Scalar(ScalarType::Unsigned32));
    assert_eq!(amount.example, json!(5));

    let flag = root.field("flag").unwrap();
    assert_eq!(flag.type_name, TypeName::Scalar(ScalarType::String));
}

#[test]
fn test_annotation_declared_after_value() {
    let root = analyze(&json!({
        "amount": 5,
        "amount:type": "double"
    }));
    assert_eq!(
        root.field("amount").unwrap().type_name,
        TypeName::Scalar(ScalarType::Float64)
    );
}

#[test]
fn test_annotation_resolves_empty_array() {
    let root = analyze(&json!({
        "pubkeys:type": "ListOfScalar<string>",
        "pubkeys": [],
        "utxos:type": "ListOfObject<Utxo, UtxoStruct>",
        "utxos": []
    }));

    let pubkeys = root.field("pubkeys").unwrap();
    assert_eq!(pubkeys.type_name, TypeName::ListOfScalar(ScalarType::String));
    assert_eq!(pubkeys.kind, NodeKind::ArrayOfScalar { element: None });

    let utxos = root.field("utxos").unwrap();
    assert_eq!(utxos.type_name, TypeName::ListOfObject("Utxo".to_string()));
    assert_eq!(utxos.storage_type.to_string(), "List<UtxoStruct>");
    assert_eq!(utxos.kind, NodeKind::ArrayOfObject { element: None });
}

#[test]
fn test_annotation_retypes_list_elements() {
    let root = analyze(&json!({
        "sizes:type": "ListOfScalar<uint16>",
        "sizes": [1, 2],
        "items:type": "ListOfObject<Item>",
        "items": [{"id": 1}]
    }));

    let sizes = root.field("sizes").unwrap();
    assert_eq!(
        sizes.element().unwrap().type_name,
        TypeName::Scalar(ScalarType::Unsigned16)
    );

    let items = root.field("items").unwrap();
    let element = items.element().unwrap();
    assert_eq!(element.type_name, TypeName::object("Item"));
    assert_eq!(field_keys(element), vec!["id"]);
}

#[test]
fn test_annotation_object_keeps_discovered_fields() {
    let root = analyze(&json!({
        "error:type": "ErrorResponseBase",
        "error": {"code": 1, "message": "failed"}
    }));
    let error = root.field("error").unwrap();
    assert_eq!(error.type_name, TypeName::object("ErrorResponseBase"));
    assert_eq!(field_keys(error), vec!["code", "message"]);
}

#[test]
fn test_annotation_object_reference_without_example_object() {
    let root = analyze(&json!({"header:type": "CommonHeader", "header": null}));
    let header = root.field("header").unwrap();
    assert_eq!(header.type_name, TypeName::object("CommonHeader"));
    assert_eq!(header.kind, NodeKind::Leaf);
}

#[test]
fn test_scalar_annotation_discards_structure() {
    let root = analyze(&json!({"blob:type": "string", "blob": {"a": 1}}));
    let blob = root.field("blob").unwrap();
    assert_eq!(blob.type_name, TypeName::Scalar(ScalarType::String));
    assert_eq!(blob.kind, NodeKind::Leaf);
}

#[test]
fn test_annotation_without_value_is_ignored() {
    let root = analyze(&json!({"ghost:type": "string", "real": 1}));
    assert_eq!(field_keys(&root), vec!["real"]);
}

#[test]
fn test_invalid_annotation_reports_field_path() {
    let err = analyze_err(&json!({"inner": {"x:type": "ListOfScalar<Foo>", "x": []}}));
    match err {
        Error::InvalidTypeAnnotation {
            path, annotation, ..
        } => {
            assert_eq!(path, "root.inner.x");
            assert_eq!(annotation, "ListOfScalar<Foo>");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_field_names_are_legalized() {
    let root = analyze(&json!({"foo-bar": 1, "FooBar": 2, "asm": "00"}));
    let fields: Vec<(&str, &str)> = root
        .fields()
        .map(|f| (f.names.method_name.as_str(), f.names.field_name.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![("FooBar", "foo_bar"), ("FooBar", "foo_bar"), ("Asm", "asm_")]
    );
}

#[test]
fn test_custom_root_name() {
    let config = GeneratorConfig {
        root_name: "payload".to_string(),
        ..GeneratorConfig::default()
    };
    let root = SchemaAnalyzer::new(&config)
        .analyze_root(&json!({"a": 1}))
        .unwrap();
    assert_eq!(root.type_name, TypeName::object("payload"));
}
