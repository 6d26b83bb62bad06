//! Schema inference and the schema merge algebra
//!
//! Maps observed JSON values to structural schemas and merges many
//! independently-inferred schemas for the same logical position into one
//! generalized schema consistent with every sample.
//!
//! # Features
//!
//! - **Type Inference**: infers a minimal schema from any JSON value
//! - **Schema Merging**: type unions, array item merging, object property
//!   merging, nullability flattening
//! - **Required Strictness**: configurable required-field policy for merged
//!   objects

mod inference;
mod types;

pub use inference::{infer_schema, infer_schema_with, merge_schemas, merge_schemas_with, SchemaMerge};
pub use types::{Primitive, RequiredPolicy, Schema, Shape};

#[cfg(test)]
mod tests;
