//! Tests for the merge combinator framework

use super::*;
use crate::error::Error;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn map<V>(pairs: Vec<(&str, V)>) -> IndexMap<String, V> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

// ============================================================================
// FirstWins Tests
// ============================================================================

#[test]
fn test_first_wins_keeps_first() {
    let merged = FirstWins.merge(vec![1, 2, 3]).unwrap();
    assert_eq!(merged, 1);
}

#[test]
fn test_first_wins_empty_is_error() {
    let result: Result<i32, _> = FirstWins.merge(vec![]);
    assert!(matches!(result, Err(Error::EmptyMerge { .. })));
}

// ============================================================================
// KeyedMerge Tests
// ============================================================================

/// Sums every value in the group; handy for observing which values reached
/// the merger.
struct Sum;

impl Merger<i32> for Sum {
    fn merge(&self, items: Vec<i32>) -> crate::Result<i32> {
        Ok(items.iter().sum())
    }
}

#[test]
fn test_keyed_merge_with_default() {
    let merger = KeyedMerge::with_default(Sum);

    let merged = merger
        .merge(vec![
            map(vec![("a", 1), ("b", 10)]),
            map(vec![("a", 2)]),
            map(vec![("b", 20), ("c", 100)]),
        ])
        .unwrap();

    assert_eq!(merged, map(vec![("a", 3), ("b", 30), ("c", 100)]));
}

#[test]
fn test_keyed_merge_only_merges_inputs_having_the_key() {
    // A record lacking a key must not contribute to that key's merge
    let merger = KeyedMerge::with_default(FirstWins);

    let merged = merger
        .merge(vec![map(vec![("b", 2)]), map(vec![("a", 1), ("b", 7)])])
        .unwrap();

    assert_eq!(merged, map(vec![("b", 2), ("a", 1)]));
}

#[test]
fn test_keyed_merge_per_key_merger_overrides_default() {
    let merger = KeyedMerge::with_default(FirstWins).on_key("total", Sum);

    let merged = merger
        .merge(vec![
            map(vec![("name", 1), ("total", 5)]),
            map(vec![("name", 9), ("total", 6)]),
        ])
        .unwrap();

    assert_eq!(merged, map(vec![("name", 1), ("total", 11)]));
}

#[test]
fn test_keyed_merge_missing_merger_is_config_error() {
    let merger: KeyedMerge<i32> = KeyedMerge::new().on_key("known", Sum);

    let result = merger.merge(vec![map(vec![("known", 1), ("unknown", 2)])]);
    match result {
        Err(Error::UnknownMergeKey { key }) => assert_eq!(key, "unknown"),
        other => panic!("expected UnknownMergeKey, got {other:?}"),
    }
}

#[test]
fn test_keyed_merge_zero_records_yields_empty() {
    let merger: KeyedMerge<i32> = KeyedMerge::with_default(Sum);
    let merged = merger.merge(vec![]).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn test_keyed_merge_key_order_is_first_seen() {
    let merger = KeyedMerge::with_default(FirstWins);

    let merged = merger
        .merge(vec![
            map(vec![("z", 1), ("a", 2)]),
            map(vec![("m", 3), ("a", 4)]),
        ])
        .unwrap();

    let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

// ============================================================================
// GroupBy Tests
// ============================================================================

#[test]
fn test_group_by_merges_per_key() {
    let merger = GroupBy::new(|n: &i32| (n % 2).to_string(), Sum);

    let merged = merger.merge(vec![vec![1, 2, 3], vec![4, 5]]).unwrap();

    // Groups sorted by key: "0" (evens) then "1" (odds)
    assert_eq!(merged, vec![6, 9]);
}

#[test]
fn test_group_by_keeps_input_order_within_group() {
    let merger = GroupBy::new(|_: &i32| "all".to_string(), FirstWins);

    let merged = merger.merge(vec![vec![7, 8], vec![9]]).unwrap();
    assert_eq!(merged, vec![7]);
}

#[test]
fn test_group_by_flattens_empty_lists() {
    let merger = GroupBy::new(|n: &i32| n.to_string(), FirstWins);

    let merged = merger.merge(vec![vec![], vec![3], vec![]]).unwrap();
    assert_eq!(merged, vec![3]);
}

#[test]
fn test_group_by_of_nothing_is_empty() {
    let merger = GroupBy::new(|n: &i32| n.to_string(), Sum);
    let merged = merger.merge(vec![]).unwrap();
    assert!(merged.is_empty());
}
