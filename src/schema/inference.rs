//! Schema inference from JSON values and the merge algebra

use super::types::{RequiredPolicy, Schema, Shape, TypeTag};
use crate::error::{Error, Result};
use crate::merge::Merger;
use crate::types::JsonValue;
use indexmap::IndexMap;
use std::collections::BTreeMap;

// ============================================================================
// Value inference
// ============================================================================

/// Infer the minimal structural schema of a single JSON value.
pub fn infer_schema(value: &JsonValue) -> Schema {
    infer_schema_with(value, RequiredPolicy::default())
}

/// Infer a schema, merging array item schemas under the given required-field
/// policy.
pub fn infer_schema_with(value: &JsonValue, policy: RequiredPolicy) -> Schema {
    match value {
        JsonValue::Null => Schema::null(),
        JsonValue::Bool(_) => Schema::boolean(),
        JsonValue::Number(_) => Schema::number(),
        JsonValue::String(_) => Schema::string(),
        JsonValue::Array(items) => {
            if items.is_empty() {
                Schema::array(Schema::any())
            } else {
                let schemas = items.iter().map(|v| infer_schema_with(v, policy)).collect();
                Schema::array(merge_total(schemas, policy))
            }
        }
        JsonValue::Object(map) => {
            let properties: IndexMap<String, Schema> = map
                .iter()
                .map(|(key, v)| (key.clone(), infer_schema_with(v, policy)))
                .collect();
            let required = properties.keys().cloned().collect();
            Schema::object(properties, required)
        }
    }
}

// ============================================================================
// Merge algebra
// ============================================================================

/// Merge a non-empty sequence of schemas into their least-general common
/// schema. Merging an empty sequence is an invariant violation.
pub fn merge_schemas(schemas: Vec<Schema>) -> Result<Schema> {
    merge_schemas_with(schemas, RequiredPolicy::default())
}

/// [`merge_schemas`] with an explicit required-field policy.
pub fn merge_schemas_with(schemas: Vec<Schema>, policy: RequiredPolicy) -> Result<Schema> {
    if schemas.is_empty() {
        return Err(Error::empty_merge("schemas"));
    }
    Ok(merge_total(schemas, policy))
}

/// Total merge over a possibly-empty sequence; only reachable internally with
/// at least one schema, but total either way.
fn merge_total(mut schemas: Vec<Schema>, policy: RequiredPolicy) -> Schema {
    // Empty sentinels carry no constraint
    schemas.retain(|s| !s.is_empty());
    if schemas.is_empty() {
        return Schema::any();
    }
    // A single schema survives unchanged, nulls included
    if schemas.len() == 1 {
        return schemas.remove(0);
    }

    let mut nullable = false;
    let mut shapes = Vec::new();
    collect_shapes(schemas, &mut shapes, &mut nullable);

    let mut groups: BTreeMap<TypeTag, Vec<Shape>> = BTreeMap::new();
    for shape in shapes {
        if let Some(tag) = shape.tag() {
            groups.entry(tag).or_default().push(shape);
        }
    }

    let mut merged: Vec<Schema> = groups
        .into_iter()
        .map(|(tag, group)| merge_same_tag(tag, group, policy))
        .collect();

    match merged.len() {
        0 => Schema::any().nullable(),
        1 => {
            let mut schema = merged.remove(0);
            schema.nullable = schema.nullable || nullable;
            schema
        }
        _ => Schema {
            shape: Shape::Union {
                alternatives: merged,
            },
            nullable,
        },
    }
}

/// Hoist nullability out of the inputs and flatten unions, so the remaining
/// shapes partition cleanly by type.
fn collect_shapes(schemas: Vec<Schema>, shapes: &mut Vec<Shape>, nullable: &mut bool) {
    for schema in schemas {
        if schema.nullable {
            *nullable = true;
        }
        match schema.shape {
            Shape::Any => {}
            Shape::Null => *nullable = true,
            Shape::Union { alternatives } => collect_shapes(alternatives, shapes, nullable),
            other => shapes.push(other),
        }
    }
}

/// Merge a non-empty group of shapes that share one type tag.
fn merge_same_tag(tag: TypeTag, shapes: Vec<Shape>, policy: RequiredPolicy) -> Schema {
    match tag {
        // Same-typed primitives are equivalent, nothing further to merge
        TypeTag::String => Schema::string(),
        TypeTag::Number => Schema::number(),
        TypeTag::Boolean => Schema::boolean(),
        TypeTag::Array => {
            let items: Vec<Schema> = shapes
                .into_iter()
                .filter_map(|shape| match shape {
                    Shape::Array { items } => Some(*items),
                    _ => None,
                })
                .collect();
            Schema::array(merge_total(items, policy))
        }
        TypeTag::Object => {
            let objects: Vec<IndexMap<String, Schema>> = shapes
                .into_iter()
                .filter_map(|shape| match shape {
                    Shape::Object { properties, .. } => Some(properties),
                    _ => None,
                })
                .collect();
            merge_objects(objects, policy)
        }
    }
}

/// Property-wise object merge: the result's property set is the union of
/// every input's keys, each property merged across only the inputs that had
/// it. The required set follows the configured policy.
fn merge_objects(mut objects: Vec<IndexMap<String, Schema>>, policy: RequiredPolicy) -> Schema {
    let total = objects.len();

    let mut order: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !order.iter().any(|k| k == key) {
                order.push(key.clone());
            }
        }
    }

    let mut properties = IndexMap::new();
    let mut required = Vec::new();
    for key in order {
        let values: Vec<Schema> = objects
            .iter_mut()
            .filter_map(|object| object.shift_remove(&key))
            .collect();
        let present = values.len();
        properties.insert(key.clone(), merge_total(values, policy));

        let is_required = match policy {
            RequiredPolicy::AnySample => true,
            RequiredPolicy::AllSamples => present == total,
        };
        if is_required {
            required.push(key);
        }
    }

    Schema::object(properties, required)
}

// ============================================================================
// Merger adapter
// ============================================================================

/// The schema algebra as a [`Merger`], so it plugs into composed merge
/// policies for records that carry schemas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaMerge {
    /// Required-field policy applied to merged object schemas
    pub policy: RequiredPolicy,
}

impl SchemaMerge {
    /// Create a schema merger with the given required-field policy
    pub fn new(policy: RequiredPolicy) -> Self {
        Self { policy }
    }
}

impl Merger<Schema> for SchemaMerge {
    fn merge(&self, items: Vec<Schema>) -> Result<Schema> {
        merge_schemas_with(items, self.policy)
    }
}
