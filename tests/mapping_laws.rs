#![cfg(feature = "mapping")]
//! Property-based tests for mapping operations.
//!
//! This module verifies that `MappingExt` satisfies the partition,
//! idempotence and precedence laws on both `HashMap` and `BTreeMap`.

use oriole::mapping::MappingExt;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

fn arbitrary_map() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map(arbitrary_key(), any::<i32>(), 0..32)
}

fn arbitrary_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arbitrary_key(), 0..16)
}

// =============================================================================
// map_values: key set and cardinality are preserved
// =============================================================================

proptest! {
    #[test]
    fn prop_map_values_preserves_keys(map in arbitrary_map()) {
        let mapped = map.map_values(|value| i64::from(*value) * 2);
        prop_assert_eq!(mapped.len(), map.len());
        for (key, value) in &map {
            prop_assert_eq!(mapped.get(key), Some(&(i64::from(*value) * 2)));
        }
    }

    #[test]
    fn prop_map_values_identity(map in arbitrary_map()) {
        prop_assert_eq!(map.map_values(|value| *value), map);
    }
}

// =============================================================================
// merge: union of keys, right-hand precedence
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_right_hand_wins(left in arbitrary_map(), right in arbitrary_map()) {
        let merged = left.merge(&right);

        let keys: HashSet<&String> = left.keys().chain(right.keys()).collect();
        prop_assert_eq!(merged.len(), keys.len());

        for (key, value) in &merged {
            match right.get(key) {
                Some(right_value) => prop_assert_eq!(value, right_value),
                None => prop_assert_eq!(Some(value), left.get(key)),
            }
        }
    }

    #[test]
    fn prop_merge_with_self_is_identity(map in arbitrary_map()) {
        prop_assert_eq!(map.merge(&map), map);
    }

    #[test]
    fn prop_merge_with_empty_is_identity(map in arbitrary_map()) {
        let empty = HashMap::new();
        prop_assert_eq!(map.merge(&empty), map.clone());
        prop_assert_eq!(empty.merge(&map), map);
    }
}

// =============================================================================
// pluck / omit: partition and idempotence
// =============================================================================

proptest! {
    #[test]
    fn prop_pluck_and_omit_partition(map in arbitrary_map(), keys in arbitrary_keys()) {
        let plucked = map.pluck(&keys);
        let omitted = map.omit(&keys);

        prop_assert!(plucked.keys().all(|key| !omitted.contains_key(key)));
        prop_assert_eq!(plucked.len() + omitted.len(), map.len());
        prop_assert_eq!(plucked.merge(&omitted), map);
    }

    #[test]
    fn prop_pluck_is_idempotent(map in arbitrary_map(), keys in arbitrary_keys()) {
        let once = map.pluck(&keys);
        prop_assert_eq!(once.pluck(&keys), once);
    }

    #[test]
    fn prop_omit_is_idempotent(map in arbitrary_map(), keys in arbitrary_keys()) {
        let once = map.omit(&keys);
        prop_assert_eq!(once.omit(&keys), once);
    }

    #[test]
    fn prop_pluck_keys_are_requested(map in arbitrary_map(), keys in arbitrary_keys()) {
        let plucked = map.pluck(&keys);
        prop_assert!(plucked.keys().all(|key| keys.contains(key)));
        for (key, value) in &plucked {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }
}

// =============================================================================
// BTreeMap agrees with HashMap
// =============================================================================

proptest! {
    #[test]
    fn prop_btree_map_agrees_with_hash_map(
        map in arbitrary_map(),
        other in arbitrary_map(),
        keys in arbitrary_keys()
    ) {
        let ordered: BTreeMap<String, i32> = map.clone().into_iter().collect();
        let ordered_other: BTreeMap<String, i32> = other.clone().into_iter().collect();

        let sorted = |hashed: HashMap<String, i32>| hashed.into_iter().collect::<BTreeMap<_, _>>();

        prop_assert_eq!(ordered.pluck(&keys), sorted(map.pluck(&keys)));
        prop_assert_eq!(ordered.omit(&keys), sorted(map.omit(&keys)));
        prop_assert_eq!(ordered.merge(&ordered_other), sorted(map.merge(&other)));
    }
}
