//! Existential and universal checks over any [`Iterable`] container.
//!
//! # Laws
//!
//! For every container `c` and predicate `p`:
//!
//! ```text
//! c.none(p)  == !c.some(p)
//! c.every(p) == !c.some(|x| !p(x))
//! c.some(p)  == c.find(p).is_some()
//! ```
//!
//! On an empty container `every` and `none` are `true` and `some` is `false`.

use super::iterable::Iterable;

/// Predicate checks over a container's items.
///
/// Predicates receive the borrowed item: `&T` for sequences and sets,
/// `(&K, &V)` for maps. Every method stops iterating as soon as its answer
/// is known.
///
/// # Examples
///
/// ```rust
/// use oriole::predicate::PredicateExt;
/// use std::collections::{HashMap, HashSet};
///
/// let words: HashSet<&str> = ["Things", "and", "other", "stuff"].into_iter().collect();
/// assert!(words.every(|word| word.len() > 2));
/// assert!(!words.every(|word| *word == "Things"));
///
/// let numbers = [9, 7, 5, 3];
/// assert!(numbers.some(|number| *number > 3));
/// assert!(numbers.none(|number| *number > 10));
///
/// let stock = HashMap::from([("apples", 3), ("pears", 0)]);
/// assert!(stock.some(|(_, count)| *count == 0));
/// assert_eq!(stock.find(|(_, count)| *count > 0), Some((&"apples", &3)));
/// ```
pub trait PredicateExt: Iterable {
    /// Returns `true` if `predicate` holds for every element.
    ///
    /// An empty container satisfies any predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::predicate::PredicateExt;
    ///
    /// assert!([2, 4, 6].every(|value| value % 2 == 0));
    /// assert!(Vec::<i32>::new().every(|_| false));
    /// ```
    fn every<'a, P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.elements().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::predicate::PredicateExt;
    ///
    /// assert!([9, 7, 5, 3].some(|value| *value > 3));
    /// assert!(!Vec::<i32>::new().some(|_| true));
    /// ```
    fn some<'a, P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.elements().any(predicate)
    }

    /// Returns `true` if `predicate` holds for no element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::predicate::PredicateExt;
    ///
    /// let readings = [9.8, 29.4, 1000.3, 234_567.89];
    /// assert!(readings.none(|reading| *reading < 0.0));
    /// assert!(!readings.none(|reading| *reading < 10_000.0));
    /// ```
    #[inline]
    fn none<'a, P>(&'a self, predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        !self.some(predicate)
    }

    /// Returns the first element, in iteration order, for which `predicate`
    /// holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::predicate::PredicateExt;
    ///
    /// let values = [8, 6, 7, 5, 3, 0, 9];
    /// assert_eq!(values.find(|value| *value < 7), Some(&6));
    /// assert_eq!(values.find(|value| *value > 9), None);
    /// ```
    fn find<'a, P>(&'a self, mut predicate: P) -> Option<Self::Item<'a>>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.elements().find(|item| predicate(*item))
    }
}

impl<C: Iterable + ?Sized> PredicateExt for C {}

// =============================================================================
// Tests
// =============================================================================
