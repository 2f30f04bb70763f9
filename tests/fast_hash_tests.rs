#![cfg(any(feature = "fxhash", feature = "ahash"))]
//! Tests for fast hash feature flags.
//!
//! This module checks that `FastHashMap`, backed by the `fxhash` or `ahash`
//! hasher, works with every `MappingExt` operation and that results keep
//! the fast hasher.

use oriole::mapping::{FastHashMap, MappingExt};
use rstest::rstest;

fn fast_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> FastHashMap<K, V>
where
    K: Eq + std::hash::Hash,
{
    let mut map = FastHashMap::default();
    map.extend(entries);
    map
}

// =============================================================================
// Hasher Preservation
// =============================================================================

/// Results are `FastHashMap`s again, so they can be chained without
/// converting back to the default hasher.
#[rstest]
fn test_results_keep_fast_hasher() {
    let map = fast_map([("a", 1), ("b", 2)]);

    let doubled: FastHashMap<&str, i32> = map.map_values(|value| value * 2);
    let plucked: FastHashMap<&str, i32> = doubled.pluck(["a"]);
    let merged: FastHashMap<&str, i32> = plucked.merge(&fast_map([("c", 3)]));
    let omitted: FastHashMap<&str, i32> = merged.omit(["a"]);

    assert_eq!(omitted, fast_map([("c", 3)]));
}

// =============================================================================
// Operations
// =============================================================================

#[rstest]
fn test_merge_right_hand_wins() {
    let original = fast_map([("This", "is a test")]);
    let update = fast_map([("No need", "for alarm"), ("This", "is not a drill")]);
    assert_eq!(
        original.merge(&update),
        fast_map([("This", "is not a drill"), ("No need", "for alarm")])
    );
}

#[rstest]
fn test_pluck_and_omit() {
    let map = fast_map([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(map.pluck(["a", "b"]), fast_map([("a", 1), ("b", 2)]));
    assert_eq!(map.omit(["c"]), fast_map([("a", 1), ("b", 2)]));
}

// =============================================================================
// Large Scale Tests (hash function stress test)
// =============================================================================

/// Tests that the fast hasher works correctly with many keys.
#[rstest]
fn test_large_scale_pluck_and_omit() {
    const COUNT: u32 = 10_000;

    let map = fast_map((0..COUNT).map(|key| (key, key * 2)));
    let evens: Vec<u32> = (0..COUNT).filter(|key| key % 2 == 0).collect();

    let plucked = map.pluck(&evens);
    let omitted = map.omit(&evens);

    assert_eq!(plucked.len(), evens.len());
    assert_eq!(omitted.len(), map.len() - evens.len());
    for key in 0..COUNT {
        if key % 2 == 0 {
            assert_eq!(plucked.get(&key), Some(&(key * 2)), "Failed to pluck key {key}");
            assert!(!omitted.contains_key(&key), "Key {key} should be omitted");
        } else {
            assert_eq!(omitted.get(&key), Some(&(key * 2)), "Failed to keep key {key}");
        }
    }
}

/// Tests that the fast hasher works correctly with string keys.
#[rstest]
fn test_string_keys_large_scale() {
    const COUNT: usize = 1_000;

    let map: FastHashMap<String, usize> = fast_map((0..COUNT).map(|i| (format!("key_{i}"), i)));
    let lengths = map.map_values_with_key(|key, value| key.len() + value);

    for i in 0..COUNT {
        let key = format!("key_{i}");
        assert_eq!(lengths.get(&key), Some(&(key.len() + i)), "Failed to get key {key}");
    }
}
