//! Spec assembly
//!
//! Folds single-sample path items into the final document. Out-of-scope
//! samples are dropped and remembered per assembler, so repeated runs in one
//! process stay independent.

use super::builder::{build_path_item, BuildOutcome};
use super::mergers::PathItemMerge;
use super::types::{Document, PathItem};
use crate::capture::Flow;
use crate::error::Result;
use crate::merge::{KeyedMerge, Merger};
use crate::schema::RequiredPolicy;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::warn;

/// Accumulates samples and produces the merged document.
pub struct SpecAssembler {
    base: String,
    policy: RequiredPolicy,
    items: Vec<IndexMap<String, PathItem>>,
    foreign_prefixes: BTreeSet<String>,
}

impl SpecAssembler {
    /// Create an assembler for the given API base (host plus optional path
    /// prefix, no scheme)
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            policy: RequiredPolicy::default(),
            items: Vec::new(),
            foreign_prefixes: BTreeSet::new(),
        }
    }

    /// Set the required-field strictness for merged object schemas
    #[must_use]
    pub fn with_required_policy(mut self, policy: RequiredPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Feed one flow into the assembly. Flows outside the base are dropped;
    /// the first sighting of each foreign prefix is logged.
    pub fn add(&mut self, flow: &Flow) {
        match build_path_item(flow, &self.base, self.policy) {
            BuildOutcome::Matched { template, item } => {
                let mut entry = IndexMap::new();
                entry.insert(template, item);
                self.items.push(entry);
            }
            BuildOutcome::Foreign { prefix } => {
                if self.foreign_prefixes.insert(prefix.clone()) {
                    warn!(%prefix, "Skipping sample outside the API base");
                }
            }
        }
    }

    /// Number of samples accepted so far
    pub fn sample_count(&self) -> usize {
        self.items.len()
    }

    /// URL prefixes of dropped out-of-scope samples, deduplicated
    pub fn foreign_prefixes(&self) -> impl Iterator<Item = &str> {
        self.foreign_prefixes.iter().map(String::as_str)
    }

    /// Merge everything collected so far into the document envelope.
    pub fn finish(self) -> Result<Document> {
        let paths = KeyedMerge::with_default(PathItemMerge::new(self.policy)).merge(self.items)?;
        Ok(Document::new(self.base, paths))
    }
}
