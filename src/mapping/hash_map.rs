//! `MappingExt` for `std::collections::HashMap`.
//!
//! Results are built with a clone of the receiver's hasher, so maps using a
//! custom `BuildHasher` (see `FastHashMap`) keep it.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::mapping_ext::MappingExt;

impl<K, V, S> MappingExt for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;
    type WithValue<W> = HashMap<K, W, S>;

    fn map_values_with_key<W, F>(&self, mut transform: F) -> HashMap<K, W, S>
    where
        K: Clone,
        F: FnMut(&K, &V) -> W,
    {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), transform(key, value))),
        );
        result
    }

    fn merge_with<F>(&self, other: &Self, mut resolver: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V, &V) -> V,
    {
        let mut result = self.clone();
        for (key, other_value) in other {
            let new_value = result.get(key).map_or_else(
                || other_value.clone(),
                |self_value| resolver(key, self_value, other_value),
            );
            result.insert(key.clone(), new_value);
        }
        result
    }

    fn pluck<I>(&self, allowed: I) -> Self
    where
        K: Clone,
        V: Clone,
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        let mut result = HashMap::with_hasher(self.hasher().clone());
        for allowed_key in allowed {
            let allowed_key: &K = allowed_key.borrow();
            if let Some((key, value)) = self.get_key_value(allowed_key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }

    fn omit<I>(&self, denied: I) -> Self
    where
        K: Clone,
        V: Clone,
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        let mut result = self.clone();
        for denied_key in denied {
            let denied_key: &K = denied_key.borrow();
            result.remove(denied_key);
        }
        result
    }
}
