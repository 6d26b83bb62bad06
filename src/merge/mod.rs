//! Merge-function combinators
//!
//! A merge function takes a non-empty sequence of same-typed items and folds
//! them into one. This module provides the generic building blocks; concrete
//! merge policies for schemas and OpenAPI records are composed from them.
//!
//! # Combinators
//!
//! - [`FirstWins`]: keeps the first item, ignores the rest
//! - [`KeyedMerge`]: field-wise merge of string-keyed records
//! - [`GroupBy`]: flattens lists, groups by a selector key, merges each group

mod combinators;

pub use combinators::{FirstWins, GroupBy, KeyedMerge, Merger};

#[cfg(test)]
mod tests;
