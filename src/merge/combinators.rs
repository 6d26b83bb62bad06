//! Generic merge combinator implementations

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A merge policy over values of type `T`.
///
/// Implementations must accept any non-empty input sequence; merging an empty
/// sequence is an invariant violation and reported as [`Error::EmptyMerge`].
pub trait Merger<T> {
    /// Merge a sequence of items into one.
    fn merge(&self, items: Vec<T>) -> Result<T>;
}

// ============================================================================
// FirstWins
// ============================================================================

/// Keeps the first item and ignores the rest.
///
/// Used where merged values are expected to be structurally identical or
/// merge-irrelevant, such as a parameter's name once grouping has already
/// matched on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWins;

impl<T> Merger<T> for FirstWins {
    fn merge(&self, items: Vec<T>) -> Result<T> {
        items
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_merge("items"))
    }
}

// ============================================================================
// KeyedMerge
// ============================================================================

/// Field-wise merge of string-keyed records.
///
/// Each key present in at least one input is merged across the inputs that
/// have it, using the key's specific merger if one is registered, or the
/// default merger otherwise. A key with neither is a configuration error.
///
/// Output keys appear in first-seen order across the inputs. Merging zero
/// records yields an empty record (the fold identity).
pub struct KeyedMerge<V> {
    mergers: IndexMap<String, Box<dyn Merger<V>>>,
    default: Option<Box<dyn Merger<V>>>,
}

impl<V> KeyedMerge<V> {
    /// Create a keyed merge with no per-key mergers and the given default
    pub fn with_default(default: impl Merger<V> + 'static) -> Self {
        Self {
            mergers: IndexMap::new(),
            default: Some(Box::new(default)),
        }
    }

    /// Create a keyed merge with only per-key mergers (no default)
    pub fn new() -> Self {
        Self {
            mergers: IndexMap::new(),
            default: None,
        }
    }

    /// Register a merger for a specific key
    #[must_use]
    pub fn on_key(mut self, key: impl Into<String>, merger: impl Merger<V> + 'static) -> Self {
        self.mergers.insert(key.into(), Box::new(merger));
        self
    }

    fn merger_for(&self, key: &str) -> Result<&dyn Merger<V>> {
        self.mergers
            .get(key)
            .or(self.default.as_ref())
            .map(AsRef::as_ref)
            .ok_or_else(|| Error::unknown_merge_key(key))
    }
}

impl<V> Default for KeyedMerge<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Merger<IndexMap<String, V>> for KeyedMerge<V> {
    fn merge(&self, mut records: Vec<IndexMap<String, V>>) -> Result<IndexMap<String, V>> {
        // Keys in first-seen order across all inputs
        let mut keys: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.clone());
                }
            }
        }

        let mut merged = IndexMap::new();
        for key in keys {
            let values: Vec<V> = records
                .iter_mut()
                .filter_map(|r| r.shift_remove(&key))
                .collect();
            let value = self.merger_for(&key)?.merge(values)?;
            merged.insert(key, value);
        }

        Ok(merged)
    }
}

// ============================================================================
// GroupBy
// ============================================================================

/// Group-then-merge list merge.
///
/// Flattens the input lists, groups the elements by a selector key, and
/// merges each group independently with the inner merger, producing one
/// output element per distinct key. Groups come out in sorted-key order
/// (deterministic within a run); items within a group keep input order.
pub struct GroupBy<T> {
    selector: Box<dyn Fn(&T) -> String>,
    merger: Box<dyn Merger<T>>,
}

impl<T> GroupBy<T> {
    /// Create a group-by merge from a key selector and a group merger
    pub fn new(
        selector: impl Fn(&T) -> String + 'static,
        merger: impl Merger<T> + 'static,
    ) -> Self {
        Self {
            selector: Box::new(selector),
            merger: Box::new(merger),
        }
    }
}

impl<T> Merger<Vec<T>> for GroupBy<T> {
    fn merge(&self, lists: Vec<Vec<T>>) -> Result<Vec<T>> {
        let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
        for item in lists.into_iter().flatten() {
            groups.entry((self.selector)(&item)).or_default().push(item);
        }

        groups
            .into_values()
            .map(|group| self.merger.merge(group))
            .collect()
    }
}
