//! Non-destructive transformations of key-value maps.
//!
//! # Laws
//!
//! For every map `m`, key list `ks` and transform `f`:
//!
//! ```text
//! m.map_values(f).keys()      == m.keys()
//! m.merge(&m)                 == m
//! m.pluck(ks).merge(&m.omit(ks)) == m
//! m.omit(ks).omit(ks)         == m.omit(ks)
//! m.pluck(ks).pluck(ks)       == m.pluck(ks)
//! ```

use std::borrow::Borrow;

/// Extension methods for key-value maps with unique keys.
///
/// Every method borrows its receiver and returns a new map; the receiver is
/// never modified.
///
/// # Associated Types
///
/// - `Key`: The key type.
/// - `Value`: The value type.
/// - `WithValue<W>`: The same kind of map with values of type `W`.
///
/// # Examples
///
/// ```rust
/// use oriole::mapping::MappingExt;
/// use std::collections::HashMap;
///
/// let scores = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
///
/// assert_eq!(scores.map_values(|score| score * 10)["b"], 20);
/// assert_eq!(scores.pluck(["a", "b"]), HashMap::from([("a", 1), ("b", 2)]));
/// assert_eq!(scores.omit(["c"]), HashMap::from([("a", 1), ("b", 2)]));
/// ```
pub trait MappingExt: Sized {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// The same kind of map holding values of type `W`.
    type WithValue<W>;

    /// Returns a map with the same keys and every value replaced by
    /// `transform(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::mapping::MappingExt;
    /// use std::collections::HashMap;
    ///
    /// let counts = HashMap::from([("Test", 1), ("ing", 2)]);
    /// assert_eq!(
    ///     counts.map_values(|count| count * 2),
    ///     HashMap::from([("Test", 2), ("ing", 4)])
    /// );
    /// ```
    fn map_values<W, F>(&self, mut transform: F) -> Self::WithValue<W>
    where
        Self::Key: Clone,
        F: FnMut(&Self::Value) -> W,
    {
        self.map_values_with_key(|_, value| transform(value))
    }

    /// Like [`MappingExt::map_values`], with the key passed to `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::mapping::MappingExt;
    /// use std::collections::BTreeMap;
    ///
    /// let greetings = BTreeMap::from([("Doot", "doot"), ("Mr.", "Skeltal")]);
    /// let labelled = greetings.map_values_with_key(|key, value| format!("{key} {value}"));
    /// assert_eq!(labelled["Mr."], "Mr. Skeltal");
    /// ```
    fn map_values_with_key<W, F>(&self, transform: F) -> Self::WithValue<W>
    where
        Self::Key: Clone,
        F: FnMut(&Self::Key, &Self::Value) -> W;

    /// Returns a map holding every entry of both maps. On a key present in
    /// both, the value from `other` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::mapping::MappingExt;
    /// use std::collections::HashMap;
    ///
    /// let original = HashMap::from([("This", "is a test")]);
    /// let update = HashMap::from([("No need", "for alarm"), ("This", "is not a drill")]);
    /// assert_eq!(
    ///     original.merge(&update),
    ///     HashMap::from([("This", "is not a drill"), ("No need", "for alarm")])
    /// );
    /// ```
    fn merge(&self, other: &Self) -> Self
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        self.merge_with(other, |_, _, right| right.clone())
    }

    /// Returns a map holding every entry of both maps, calling
    /// `resolver(key, self_value, other_value)` for keys present in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::mapping::MappingExt;
    /// use std::collections::BTreeMap;
    ///
    /// let left = BTreeMap::from([(1, 100), (2, 200)]);
    /// let right = BTreeMap::from([(2, 50), (3, 300)]);
    /// let merged = left.merge_with(&right, |_, a, b| a + b);
    /// assert_eq!(merged, BTreeMap::from([(1, 100), (2, 250), (3, 300)]));
    /// ```
    fn merge_with<F>(&self, other: &Self, resolver: F) -> Self
    where
        Self::Key: Clone,
        Self::Value: Clone,
        F: FnMut(&Self::Key, &Self::Value, &Self::Value) -> Self::Value;

    /// Returns a map holding only the entries whose key is in `allowed`.
    ///
    /// Keys in `allowed` that are absent from the map are ignored.
    fn pluck<I>(&self, allowed: I) -> Self
    where
        Self::Key: Clone,
        Self::Value: Clone,
        I: IntoIterator,
        I::Item: Borrow<Self::Key>;

    /// Returns a map holding only the entries whose key is not in `denied`.
    ///
    /// Keys in `denied` that are absent from the map are ignored.
    fn omit<I>(&self, denied: I) -> Self
    where
        Self::Key: Clone,
        Self::Value: Clone,
        I: IntoIterator,
        I::Item: Borrow<Self::Key>;
}
