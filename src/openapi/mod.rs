//! OpenAPI document model and assembly
//!
//! Builds single-sample path items from decoded flows and folds them into
//! one merged document.
//!
//! # Pipeline
//!
//! - [`build_path_item`]: one flow → one templated URL + one path item
//! - merge policies for parameters, media types, responses, operations and
//!   path items, composed from the generic combinators
//! - [`SpecAssembler`]: folds every sample into the final [`Document`]

mod assemble;
mod builder;
mod mergers;
mod types;

pub use assemble::SpecAssembler;
pub use builder::{build_path_item, BuildOutcome};
pub use mergers::{
    parameter_list_merge, MediaTypeMerge, OperationMerge, ParameterMerge, PathItemMerge,
    RequestBodyMerge, ResponseMerge,
};
pub use types::{
    Document, Info, MediaTypeObject, Operation, Parameter, ParameterLocation, PathItem,
    RequestBody, ResponseObject, Server,
};
