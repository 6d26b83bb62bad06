//! Schema types

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Primitive schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl Primitive {
    /// The OpenAPI type name for this primitive
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }
}

/// The structural part of a schema, without nullability
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// The empty schema: no information, no constraint. Produced for the item
    /// schema of an empty array and dropped on merge.
    Any,
    /// A literal `null` observed on its own
    Null,
    /// A primitive type
    Primitive(Primitive),
    /// An array with one shared item schema
    Array {
        items: Box<Schema>,
    },
    /// An object with per-property schemas
    Object {
        properties: IndexMap<String, Schema>,
        required: Vec<String>,
    },
    /// Genuinely incompatible top-level types; alternatives are mutually
    /// exclusive by type and never nest another union
    Union {
        alternatives: Vec<Schema>,
    },
}

/// Ordering key for union alternatives and merge partitioning. The variant
/// order here is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl Shape {
    /// The partition tag of this shape; `None` for the shapes that merge
    /// strips away before partitioning (Any, Null, Union).
    pub(crate) fn tag(&self) -> Option<TypeTag> {
        match self {
            Shape::Any | Shape::Null | Shape::Union { .. } => None,
            Shape::Primitive(Primitive::String) => Some(TypeTag::String),
            Shape::Primitive(Primitive::Number) => Some(TypeTag::Number),
            Shape::Primitive(Primitive::Boolean) => Some(TypeTag::Boolean),
            Shape::Array { .. } => Some(TypeTag::Array),
            Shape::Object { .. } => Some(TypeTag::Object),
        }
    }
}

/// A structural description of the set of values a field may take
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// The structural shape
    pub shape: Shape,
    /// Whether `null` is also an admissible value
    pub nullable: bool,
}

impl Schema {
    /// The empty schema ("no information")
    pub fn any() -> Self {
        Self {
            shape: Shape::Any,
            nullable: false,
        }
    }

    /// The schema of a lone observed `null`
    pub fn null() -> Self {
        Self {
            shape: Shape::Null,
            nullable: false,
        }
    }

    /// A primitive schema
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            shape: Shape::Primitive(primitive),
            nullable: false,
        }
    }

    /// A string schema
    pub fn string() -> Self {
        Self::primitive(Primitive::String)
    }

    /// A number schema
    pub fn number() -> Self {
        Self::primitive(Primitive::Number)
    }

    /// A boolean schema
    pub fn boolean() -> Self {
        Self::primitive(Primitive::Boolean)
    }

    /// An array schema with the given item schema
    pub fn array(items: Schema) -> Self {
        Self {
            shape: Shape::Array {
                items: Box::new(items),
            },
            nullable: false,
        }
    }

    /// An object schema
    pub fn object(properties: IndexMap<String, Schema>, required: Vec<String>) -> Self {
        Self {
            shape: Shape::Object {
                properties,
                required,
            },
            nullable: false,
        }
    }

    /// Mark this schema as nullable
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether this is the empty schema with no nullability information
    pub fn is_empty(&self) -> bool {
        matches!(self.shape, Shape::Any) && !self.nullable
    }

    /// Convert to a JSON value in the serialized (OpenAPI-style) form
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.nullable {
            map.serialize_entry("nullable", &true)?;
        }
        match &self.shape {
            Shape::Any => {}
            Shape::Null => map.serialize_entry("type", "null")?,
            Shape::Primitive(primitive) => map.serialize_entry("type", primitive.as_str())?,
            Shape::Array { items } => {
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
            }
            Shape::Object {
                properties,
                required,
            } => {
                map.serialize_entry("type", "object")?;
                map.serialize_entry("properties", properties)?;
                map.serialize_entry("required", required)?;
            }
            Shape::Union { alternatives } => map.serialize_entry("anyOf", alternatives)?,
        }
        map.end()
    }
}

/// Strictness policy for the `required` set of merged object schemas.
///
/// The original behavior marks every key seen in any sample as required, even
/// when other samples omit it entirely. That overgeneralization is kept as
/// the default; `AllSamples` is the stricter alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequiredPolicy {
    /// A key is required if any merged sample had it (default)
    #[default]
    AnySample,
    /// A key is required only if every merged sample had it
    AllSamples,
}
