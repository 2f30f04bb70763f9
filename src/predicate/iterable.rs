//! The `Iterable` capability trait.
//!
//! `Iterable` abstracts over containers that can hand out a borrowing
//! iterator, whether ordered (`Vec`, `VecDeque`), unordered (`HashSet`) or
//! keyed (`HashMap`, whose items are `(&K, &V)` pairs). It is the only
//! capability the predicate operations need: no random access, no mutation.

use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque, binary_heap,
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque,
};
use std::slice;

/// A finite container that can be iterated by reference.
///
/// # Associated Types
///
/// - `Item<'a>`: The borrowed item yielded per entry. `&'a T` for sequences
///   and sets, `(&'a K, &'a V)` for maps.
/// - `Iter<'a>`: The borrowing iterator returned by [`Iterable::elements`].
///
/// # Examples
///
/// ```rust
/// use oriole::predicate::Iterable;
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
/// let collected: Vec<&i32> = set.elements().collect();
/// assert_eq!(collected, vec![&1, &2, &3]);
///
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
/// let entries: Vec<(&&str, &i32)> = map.elements().collect();
/// assert_eq!(entries, vec![(&"a", &1), (&"b", &2)]);
/// ```
pub trait Iterable {
    /// A borrowed item of the container.
    type Item<'a>: Copy
    where
        Self: 'a;

    /// The iterator over borrowed items.
    type Iter<'a>: Iterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Returns an iterator over the items, in the container's own
    /// iteration order.
    fn elements(&self) -> Self::Iter<'_>;
}

/// Implements `Iterable` for a container whose `iter()` yields `&T` through a
/// named borrowing iterator.
macro_rules! impl_borrowing_iter {
    ($([$($generics:tt)*] $container:ty => $element:ty, $iter:ident),* $(,)?) => {
        $(
            impl<$($generics)*> Iterable for $container {
                type Item<'a>
                    = &'a $element
                where
                    Self: 'a;
                type Iter<'a>
                    = $iter::Iter<'a, $element>
                where
                    Self: 'a;

                #[inline]
                fn elements(&self) -> $iter::Iter<'_, $element> {
                    self.iter()
                }
            }
        )*
    };
}

// =============================================================================
// Slice-backed Containers
// =============================================================================

impl_borrowing_iter! {
    [T] [T] => T, slice,
    [T] Vec<T> => T, slice,
    [T, const N: usize] [T; N] => T, slice,
}

#[cfg(feature = "smallvec")]
impl_borrowing_iter! {
    [A: smallvec::Array] smallvec::SmallVec<A> => A::Item, slice,
}

#[cfg(feature = "arrayvec")]
impl_borrowing_iter! {
    [T, const CAP: usize] arrayvec::ArrayVec<T, CAP> => T, slice,
}

// =============================================================================
// Other Ordered Containers
// =============================================================================

impl_borrowing_iter! {
    [T] VecDeque<T> => T, vec_deque,
    [T] LinkedList<T> => T, linked_list,
}

impl<T> Iterable for Option<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Iter<'a>
        = std::option::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> std::option::Iter<'_, T> {
        self.iter()
    }
}

// =============================================================================
// Unordered Containers
// =============================================================================

impl_borrowing_iter! {
    [T, S] HashSet<T, S> => T, hash_set,
    [T] BTreeSet<T> => T, btree_set,
    [T] BinaryHeap<T> => T, binary_heap,
}

// =============================================================================
// Keyed Containers
// =============================================================================

impl<K, V, S> Iterable for HashMap<K, V, S> {
    type Item<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> hash_map::Iter<'_, K, V> {
        self.iter()
    }
}

impl<K, V> Iterable for BTreeMap<K, V> {
    type Item<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> btree_map::Iter<'_, K, V> {
        self.iter()
    }
}
