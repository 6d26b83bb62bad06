//! OpenAPI model types
//!
//! Only the subset of the OpenAPI 3.0 object model that spec generation
//! produces. Mappings are insertion-ordered so the output follows the order
//! in which things were observed.

use crate::schema::Schema;
use crate::types::JsonValue;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Where a parameter lives in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
}

impl ParameterLocation {
    /// Lowercase name, as serialized into the `in` field
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
        }
    }
}

/// OpenAPI Parameter Object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Path parameters are always required; query parameters omit the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub schema: Schema,
    pub example: JsonValue,
}

impl Parameter {
    /// A path parameter (always required)
    pub fn path(name: impl Into<String>, schema: Schema, example: JsonValue) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            required: Some(true),
            schema,
            example,
        }
    }

    /// A query parameter
    pub fn query(name: impl Into<String>, schema: Schema, example: JsonValue) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Query,
            required: None,
            schema,
            example,
        }
    }
}

/// OpenAPI Media Type Object: one observed body shape plus an example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaTypeObject {
    pub schema: Schema,
    pub example: JsonValue,
}

/// OpenAPI Response Object for one status code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseObject {
    /// The HTTP reason phrase of the first sample
    pub description: String,
    /// Media type → body shape
    pub content: IndexMap<String, MediaTypeObject>,
}

/// OpenAPI Request Body Object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: IndexMap<String, MediaTypeObject>,
}

/// OpenAPI Operation Object: one HTTP method on one templated URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Status code → response
    pub responses: IndexMap<String, ResponseObject>,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Query parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// OpenAPI Path Item Object: all observed methods on one templated URL plus
/// its path parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// Lowercased method → operation, in observation order
    pub operations: IndexMap<String, Operation>,
    /// Path-level parameters derived from URL templating
    pub parameters: Vec<Parameter>,
}

impl Serialize for PathItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (method, operation) in &self.operations {
            map.serialize_entry(method, operation)?;
        }
        if !self.parameters.is_empty() {
            map.serialize_entry("parameters", &self.parameters)?;
        }
        map.end()
    }
}

/// A declared server entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub url: String,
}

/// Static document metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// The top-level OpenAPI document envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub openapi: String,
    pub servers: Vec<Server>,
    pub info: Info,
    pub paths: IndexMap<String, PathItem>,
}

impl Document {
    /// The OpenAPI version every generated document declares
    pub const SPEC_VERSION: &'static str = "3.0.2";

    /// Wrap merged paths in the document envelope
    pub fn new(base_url: impl Into<String>, paths: IndexMap<String, PathItem>) -> Self {
        Self {
            openapi: Self::SPEC_VERSION.to_string(),
            servers: vec![Server {
                url: base_url.into(),
            }],
            info: Info {
                title: "A Generated OpenAPI Spec".to_string(),
                version: "0.0.1".to_string(),
            },
            paths,
        }
    }
}
