//! Merge policies for OpenAPI records
//!
//! Each record's merge policy is composed by construction from the generic
//! combinators plus the schema algebra: schemas merge algebraically,
//! discriminators and examples are first-wins, keyed sub-records merge
//! key-by-key.

use super::types::{MediaTypeObject, Operation, Parameter, PathItem, RequestBody, ResponseObject};
use crate::error::{Error, Result};
use crate::merge::{GroupBy, KeyedMerge, Merger};
use crate::schema::{merge_schemas_with, RequiredPolicy};

// ============================================================================
// Parameters
// ============================================================================

/// Merges parameters already known to share a location and name: the schema
/// merges algebraically, everything else keeps the first-seen value.
#[derive(Debug, Clone, Copy)]
pub struct ParameterMerge {
    policy: RequiredPolicy,
}

impl ParameterMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self { policy }
    }
}

impl Merger<Parameter> for ParameterMerge {
    fn merge(&self, mut params: Vec<Parameter>) -> Result<Parameter> {
        if params.is_empty() {
            return Err(Error::empty_merge("parameters"));
        }
        let schemas = params.iter().map(|p| p.schema.clone()).collect();
        let mut first = params.remove(0);
        first.schema = merge_schemas_with(schemas, self.policy)?;
        Ok(first)
    }
}

/// Parameter lists merge by grouping on the `in`/`name` discriminator pair
pub fn parameter_list_merge(policy: RequiredPolicy) -> GroupBy<Parameter> {
    GroupBy::new(
        |param: &Parameter| format!("{}:{}", param.location.as_str(), param.name),
        ParameterMerge::new(policy),
    )
}

// ============================================================================
// Media types, responses, request bodies
// ============================================================================

/// Merges media type objects: schema algebraically, example first-wins
#[derive(Debug, Clone, Copy)]
pub struct MediaTypeMerge {
    policy: RequiredPolicy,
}

impl MediaTypeMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self { policy }
    }
}

impl Merger<MediaTypeObject> for MediaTypeMerge {
    fn merge(&self, mut items: Vec<MediaTypeObject>) -> Result<MediaTypeObject> {
        if items.is_empty() {
            return Err(Error::empty_merge("media type objects"));
        }
        let schemas = items.iter().map(|m| m.schema.clone()).collect();
        let mut first = items.remove(0);
        first.schema = merge_schemas_with(schemas, self.policy)?;
        Ok(first)
    }
}

/// Merges same-status responses: description first-wins, content key-by-key
pub struct ResponseMerge {
    content: KeyedMerge<MediaTypeObject>,
}

impl ResponseMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self {
            content: KeyedMerge::with_default(MediaTypeMerge::new(policy)),
        }
    }
}

impl Merger<ResponseObject> for ResponseMerge {
    fn merge(&self, items: Vec<ResponseObject>) -> Result<ResponseObject> {
        if items.is_empty() {
            return Err(Error::empty_merge("responses"));
        }
        let mut descriptions = Vec::new();
        let mut contents = Vec::new();
        for item in items {
            descriptions.push(item.description);
            contents.push(item.content);
        }

        Ok(ResponseObject {
            description: descriptions.remove(0),
            content: self.content.merge(contents)?,
        })
    }
}

/// Merges request bodies the same way as response content
pub struct RequestBodyMerge {
    content: KeyedMerge<MediaTypeObject>,
}

impl RequestBodyMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self {
            content: KeyedMerge::with_default(MediaTypeMerge::new(policy)),
        }
    }
}

impl Merger<RequestBody> for RequestBodyMerge {
    fn merge(&self, items: Vec<RequestBody>) -> Result<RequestBody> {
        if items.is_empty() {
            return Err(Error::empty_merge("request bodies"));
        }
        let mut descriptions = Vec::new();
        let mut contents = Vec::new();
        for item in items {
            if let Some(description) = item.description {
                descriptions.push(description);
            }
            contents.push(item.content);
        }

        Ok(RequestBody {
            description: descriptions.into_iter().next(),
            content: self.content.merge(contents)?,
        })
    }
}

// ============================================================================
// Operations and path items
// ============================================================================

/// Merges same-method operations field by field
pub struct OperationMerge {
    parameters: GroupBy<Parameter>,
    request_body: RequestBodyMerge,
    responses: KeyedMerge<ResponseObject>,
}

impl OperationMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self {
            parameters: parameter_list_merge(policy),
            request_body: RequestBodyMerge::new(policy),
            responses: KeyedMerge::with_default(ResponseMerge::new(policy)),
        }
    }
}

impl Merger<Operation> for OperationMerge {
    fn merge(&self, items: Vec<Operation>) -> Result<Operation> {
        if items.is_empty() {
            return Err(Error::empty_merge("operations"));
        }
        let mut parameters = Vec::new();
        let mut bodies = Vec::new();
        let mut responses = Vec::new();
        for item in items {
            parameters.push(item.parameters);
            // Only operations carrying a body contribute to the body merge
            if let Some(body) = item.request_body {
                bodies.push(body);
            }
            responses.push(item.responses);
        }

        let request_body = if bodies.is_empty() {
            None
        } else {
            Some(self.request_body.merge(bodies)?)
        };

        Ok(Operation {
            responses: self.responses.merge(responses)?,
            request_body,
            parameters: self.parameters.merge(parameters)?,
        })
    }
}

/// Merges path items sharing one URL template: operations merge per method,
/// path-level parameters keep the first non-empty descriptor list (same
/// template means structurally identical path parameters).
pub struct PathItemMerge {
    operations: KeyedMerge<Operation>,
}

impl PathItemMerge {
    pub fn new(policy: RequiredPolicy) -> Self {
        Self {
            operations: KeyedMerge::with_default(OperationMerge::new(policy)),
        }
    }
}

impl Merger<PathItem> for PathItemMerge {
    fn merge(&self, items: Vec<PathItem>) -> Result<PathItem> {
        if items.is_empty() {
            return Err(Error::empty_merge("path items"));
        }
        let mut parameters = Vec::new();
        let mut operations = Vec::new();
        for item in items {
            if parameters.is_empty() {
                parameters = item.parameters;
            }
            operations.push(item.operations);
        }

        Ok(PathItem {
            operations: self.operations.merge(operations)?,
            parameters,
        })
    }
}
