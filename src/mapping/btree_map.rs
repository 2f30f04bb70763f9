//! `MappingExt` for `std::collections::BTreeMap`.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use super::mapping_ext::MappingExt;

impl<K: Ord, V> MappingExt for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type WithValue<W> = BTreeMap<K, W>;

    fn map_values_with_key<W, F>(&self, mut transform: F) -> BTreeMap<K, W>
    where
        K: Clone,
        F: FnMut(&K, &V) -> W,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), transform(key, value)))
            .collect()
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
        allowed
            .into_iter()
            .filter_map(|allowed_key| {
                let allowed_key: &K = allowed_key.borrow();
                self.get_key_value(allowed_key)
                    .map(|(key, value)| (key.clone(), value.clone()))
            })
            .collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[rstest]
    fn map_values_keeps_order_and_keys() {
        let doubled = letters().map_values(|value| value * 2);
        assert_eq!(
            doubled.into_iter().collect::<Vec<_>>(),
            vec![("a", 2), ("b", 4), ("c", 6)]
        );
    }

    #[rstest]
    fn merge_right_hand_wins() {
        let update = BTreeMap::from([("c", 30), ("d", 4)]);
        assert_eq!(
            letters().merge(&update),
            BTreeMap::from([("a", 1), ("b", 2), ("c", 30), ("d", 4)])
        );
    }

    #[rstest]
    #[case(vec!["a", "b"], vec![("a", 1), ("b", 2)])]
    #[case(vec!["c", "z"], vec![("c", 3)])]
    #[case(vec![], vec![])]
    fn pluck_cases(
        #[case] allowed: Vec<&'static str>,
        #[case] expected: Vec<(&'static str, i32)>,
    ) {
        let plucked = letters().pluck(allowed);
        assert_eq!(plucked.into_iter().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(vec!["c"], vec![("a", 1), ("b", 2)])]
    #[case(vec!["a", "b", "c"], vec![])]
    #[case(vec!["z"], vec![("a", 1), ("b", 2), ("c", 3)])]
    fn omit_cases(
        #[case] denied: Vec<&'static str>,
        #[case] expected: Vec<(&'static str, i32)>,
    ) {
        let omitted = letters().omit(denied);
        assert_eq!(omitted.into_iter().collect::<Vec<_>>(), expected);
    }
}
