//! Schema inference and merge tests

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

fn infer(value: &serde_json::Value) -> Schema {
    infer_schema(value)
}

// ============================================================================
// Inference Tests
// ============================================================================

#[test]
fn test_infer_primitives() {
    assert_eq!(infer(&json!("hello")), Schema::string());
    assert_eq!(infer(&json!(42)), Schema::number());
    assert_eq!(infer(&json!(3.25)), Schema::number());
    assert_eq!(infer(&json!(true)), Schema::boolean());
    assert_eq!(infer(&json!(null)), Schema::null());
}

#[test]
fn test_infer_empty_array_has_empty_items() {
    let schema = infer(&json!([]));
    assert_eq!(schema, Schema::array(Schema::any()));
    assert_eq!(schema.to_json(), json!({"type": "array", "items": {}}));
}

#[test]
fn test_infer_array_merges_all_elements() {
    let schema = infer(&json!([1, 2, 3]));
    assert_eq!(schema, Schema::array(Schema::number()));

    // Mixed element types produce one shared anyOf item schema
    let schema = infer(&json!([1, "two"]));
    assert_eq!(
        schema.to_json(),
        json!({
            "type": "array",
            "items": {"anyOf": [{"type": "string"}, {"type": "number"}]}
        })
    );
}

#[test]
fn test_infer_object_marks_all_keys_required() {
    let schema = infer(&json!({"name": "John", "age": 30}));
    assert_eq!(
        schema.to_json(),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "number"}
            },
            "required": ["name", "age"]
        })
    );
}

#[test]
fn test_infer_nested_object() {
    let schema = infer(&json!({"user": {"id": 7, "tags": ["a", "b"]}}));
    assert_eq!(
        schema.to_json(),
        json!({
            "type": "object",
            "properties": {
                "user": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "number"},
                        "tags": {"type": "array", "items": {"type": "string"}}
                    },
                    "required": ["id", "tags"]
                }
            },
            "required": ["user"]
        })
    );
}

// ============================================================================
// Merge Tests
// ============================================================================

#[test]
fn test_merge_empty_sequence_is_error() {
    let result = merge_schemas(vec![]);
    assert!(matches!(result, Err(Error::EmptyMerge { .. })));
}

#[test]
fn test_merge_single_schema_is_identity() {
    let schemas = vec![
        Schema::string(),
        Schema::null(),
        Schema::array(Schema::number()),
        infer(&json!({"a": 1})),
    ];

    for schema in schemas {
        let merged = merge_schemas(vec![schema.clone()]).unwrap();
        assert_eq!(merged, schema);
    }
}

#[test]
fn test_merge_is_idempotent_under_repetition() {
    let schema = infer(&json!({"a": [1, "x"], "b": null}));

    // One self-merge may normalize (a lone null flattens into the nullable
    // flag); after that, self-merging is a fixed point
    let once = merge_schemas(vec![schema.clone(), schema]).unwrap();
    let twice = merge_schemas(vec![once.clone(), once.clone()]).unwrap();
    let thrice = merge_schemas(vec![twice.clone(), twice.clone()]).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}

#[test]
fn test_merge_drops_empty_schemas() {
    let merged = merge_schemas(vec![Schema::any(), Schema::number(), Schema::any()]).unwrap();
    assert_eq!(merged, Schema::number());

    let merged = merge_schemas(vec![Schema::any(), Schema::any()]).unwrap();
    assert_eq!(merged, Schema::any());
}

#[test]
fn test_merge_same_primitives() {
    let merged = merge_schemas(vec![Schema::string(), Schema::string()]).unwrap();
    assert_eq!(merged, Schema::string());
}

#[test]
fn test_merge_incompatible_types_forms_union() {
    let merged = merge_schemas(vec![infer(&json!(1)), infer(&json!("x"))]).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({"anyOf": [{"type": "string"}, {"type": "number"}]})
    );
}

#[test]
fn test_merge_union_order_insensitive() {
    let forward = merge_schemas(vec![infer(&json!(1)), infer(&json!("x")), infer(&json!(true))])
        .unwrap();
    let backward = merge_schemas(vec![infer(&json!(true)), infer(&json!("x")), infer(&json!(1))])
        .unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_merge_null_with_object_sets_nullable() {
    let merged = merge_schemas(vec![infer(&json!(null)), infer(&json!({"a": 1}))]).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "nullable": true,
            "type": "object",
            "properties": {"a": {"type": "number"}},
            "required": ["a"]
        })
    );
}

#[test]
fn test_merge_only_nulls() {
    // A lone null keeps its literal schema; two nulls flatten to a bare flag
    let merged = merge_schemas(vec![Schema::null()]).unwrap();
    assert_eq!(merged.to_json(), json!({"type": "null"}));

    let merged = merge_schemas(vec![Schema::null(), Schema::null()]).unwrap();
    assert_eq!(merged.to_json(), json!({"nullable": true}));
}

#[test]
fn test_merge_nullable_union() {
    let merged =
        merge_schemas(vec![infer(&json!(null)), infer(&json!(1)), infer(&json!("x"))]).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "nullable": true,
            "anyOf": [{"type": "string"}, {"type": "number"}]
        })
    );
}

#[test]
fn test_merge_arrays_merges_item_schemas() {
    let merged = merge_schemas(vec![infer(&json!([1, 2])), infer(&json!(["a"]))]).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "type": "array",
            "items": {"anyOf": [{"type": "string"}, {"type": "number"}]}
        })
    );
}

#[test]
fn test_merge_array_with_empty_array_keeps_known_items() {
    let merged = merge_schemas(vec![infer(&json!([])), infer(&json!([5]))]).unwrap();
    assert_eq!(merged, Schema::array(Schema::number()));
}

#[test]
fn test_merge_objects_unions_disjoint_keys() {
    let samples = [
        json!({"id": 1, "name": "a"}),
        json!({"id": 2, "email": "a@b.c"}),
        json!({"id": 3}),
    ];
    let schemas = samples.iter().map(infer).collect();

    let merged = merge_schemas(schemas).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "number"},
                "name": {"type": "string"},
                "email": {"type": "string"}
            },
            "required": ["id", "name", "email"]
        })
    );
}

#[test]
fn test_merge_object_property_conflict_becomes_union() {
    let merged =
        merge_schemas(vec![infer(&json!({"a": 1})), infer(&json!({"a": "x"}))]).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "type": "object",
            "properties": {"a": {"anyOf": [{"type": "string"}, {"type": "number"}]}},
            "required": ["a"]
        })
    );
}

#[test]
fn test_required_policy_all_samples() {
    let schemas: Vec<Schema> = [
        json!({"id": 1, "name": "a"}),
        json!({"id": 2}),
    ]
    .iter()
    .map(infer)
    .collect();

    let merged = merge_schemas_with(schemas, RequiredPolicy::AllSamples).unwrap();
    assert_eq!(
        merged.to_json(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "number"},
                "name": {"type": "string"}
            },
            "required": ["id"]
        })
    );
}

#[test]
fn test_schema_merge_adapter() {
    use crate::merge::Merger;

    let merger = SchemaMerge::default();
    let merged = merger.merge(vec![Schema::number(), Schema::number()]).unwrap();
    assert_eq!(merged, Schema::number());

    assert!(merger.merge(vec![]).is_err());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_serialize_empty_and_nullable() {
    assert_eq!(Schema::any().to_json(), json!({}));
    assert_eq!(Schema::any().nullable().to_json(), json!({"nullable": true}));
    assert_eq!(
        Schema::string().nullable().to_json(),
        json!({"nullable": true, "type": "string"})
    );
}
