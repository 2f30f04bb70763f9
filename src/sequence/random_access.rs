//! The `RandomAccess` capability trait and its standard library implementations.
//!
//! `RandomAccess` describes an ordered, finite, randomly indexable container:
//! it exposes a start index, an (exclusive) end index, a distance between two
//! indices, positional access and a borrowed view over a range of positions.
//!
//! Every operation of [`SequenceExt`](super::SequenceExt) is written in terms
//! of these five primitives, so implementing `RandomAccess` for a new
//! container is enough to get the whole extension surface.
//!
//! # Examples
//!
//! ```rust
//! use oriole::sequence::RandomAccess;
//!
//! let values = vec![10, 20, 30];
//! assert_eq!(values.start_index(), 0);
//! assert_eq!(values.end_index(), 3);
//! assert_eq!(values.element(1), &20);
//! assert_eq!(values.view(1..3), &[20, 30]);
//! ```

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::ops::Range;

/// An ordered, finite container with random access to its elements.
///
/// Valid positions lie in `start_index()..end_index()`. Implementations with
/// a non-zero start index are allowed; nothing in this crate assumes that
/// positions begin at zero.
///
/// # Associated Types
///
/// - `Element`: The type of the stored elements.
/// - `View<'a>`: A borrowed, read-only view over a contiguous range of
///   positions. Slice-backed containers use `&'a [Element]`.
pub trait RandomAccess {
    /// The type of the elements stored in the container.
    type Element;

    /// A borrowed view over a range of positions.
    type View<'a>
    where
        Self: 'a;

    /// The first valid position.
    #[inline]
    fn start_index(&self) -> usize {
        0
    }

    /// One past the last valid position.
    fn end_index(&self) -> usize;

    /// The number of positions between `from` and `to`.
    ///
    /// Returns zero when `to` precedes `from`.
    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to.saturating_sub(from)
    }

    /// Returns the element at `index`.
    ///
    /// The caller must guarantee `start_index() <= index < end_index()`.
    /// Implementations are free to panic otherwise; use
    /// [`SequenceExt::safe`](super::SequenceExt::safe) for checked access.
    fn element(&self, index: usize) -> &Self::Element;

    /// Returns a view over the positions in `range`.
    ///
    /// The caller must guarantee that `range` lies within
    /// `start_index()..end_index()`.
    fn view(&self, range: Range<usize>) -> Self::View<'_>;
}

// =============================================================================
// Slice Implementation
// =============================================================================

impl<T> RandomAccess for [T] {
    type Element = T;
    type View<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn view(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

// =============================================================================
// Slice-backed Containers
// =============================================================================

/// Implements `RandomAccess` for a container that dereferences to `[T]`,
/// using slices as views.
macro_rules! impl_slice_backed {
    ($([$($generics:tt)*] $container:ty => $element:ty),* $(,)?) => {
        $(
            impl<$($generics)*> RandomAccess for $container {
                type Element = $element;
                type View<'a>
                    = &'a [$element]
                where
                    Self: 'a;

                #[inline]
                fn end_index(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn element(&self, index: usize) -> &$element {
                    &self[index]
                }

                #[inline]
                fn view(&self, range: Range<usize>) -> &[$element] {
                    &self[range]
                }
            }
        )*
    };
}

impl_slice_backed! {
    [T] Vec<T> => T,
    [T, const N: usize] [T; N] => T,
}

#[cfg(feature = "smallvec")]
impl_slice_backed! {
    [A: smallvec::Array] smallvec::SmallVec<A> => A::Item,
}

#[cfg(feature = "arrayvec")]
impl_slice_backed! {
    [T, const CAP: usize] arrayvec::ArrayVec<T, CAP> => T,
}

// =============================================================================
// VecDeque Implementation
// =============================================================================

impl<T> RandomAccess for VecDeque<T> {
    type Element = T;
    type View<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn view(&self, range: Range<usize>) -> vec_deque::Iter<'_, T> {
        self.range(range)
    }
}

// =============================================================================
// Tests
// =============================================================================
