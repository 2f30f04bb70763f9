//! Sequence extension methods - safe access, accessors, sampling and chunking.
//!
//! This module provides the `SequenceExt` trait, which is implemented for
//! every [`RandomAccess`] container. None of its methods panic: positions
//! outside the container, empty inputs and missing elements are reported as
//! `None` (or, for [`SequenceExt::try_chunk`], as a [`ChunkSizeError`]).
//!
//! # Single-element Policy
//!
//! [`SequenceExt::initial`] and [`SequenceExt::tail`] return `None` for an
//! empty sequence, and a view of the whole sequence when it holds exactly one
//! element:
//!
//! ```text
//! [].initial()      == None
//! [1].initial()     == Some([1])
//! [1, 2].initial()  == Some([1])
//! ```
//!
//! # Examples
//!
//! ```rust
//! use oriole::sequence::SequenceExt;
//! use std::num::NonZeroUsize;
//!
//! let values = vec![5, 4, 3, 2, 1];
//! assert_eq!(values.safe(1), Some(&4));
//! assert_eq!(values.safe(90), None);
//! assert_eq!(values.at([1, 5, 90]), vec![&4]);
//!
//! let words = vec!["This", "is", "a", "test"];
//! let size = NonZeroUsize::new(3).unwrap();
//! assert_eq!(words.chunk(size), vec![vec!["This", "is", "a"], vec!["test"]]);
//! ```

use std::num::NonZeroUsize;
use std::ops::Range;

use super::error::ChunkSizeError;
use super::random_access::RandomAccess;

/// Extension methods for ordered, randomly indexable containers.
///
/// # Provided Methods
///
/// - `len_between`: Number of positions between the start and end index
/// - `safe`: Checked positional access
/// - `at`: Multi-position extraction, dropping invalid positions
/// - `at_all`: Multi-position extraction, all or nothing
/// - `head` / `last`: First and last element
/// - `initial` / `tail`: Views without the last or first element
/// - `sample`: Uniformly drawn element (feature `random`)
/// - `chunk` / `try_chunk`: Consecutive groups of a fixed size
pub trait SequenceExt: RandomAccess {
    /// Returns the number of elements, measured as the distance between the
    /// start and end index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// assert_eq!([1, 2, 3].len_between(), 3);
    /// assert_eq!(Vec::<i32>::new().len_between(), 0);
    /// ```
    #[inline]
    fn len_between(&self) -> usize {
        self.distance(self.start_index(), self.end_index())
    }

    /// Returns the element at `index`, or `None` if `index` is outside
    /// `start_index()..end_index()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// let values = [4, 8, 15, 16, 23, 42];
    /// assert_eq!(values.safe(0), Some(&4));
    /// assert_eq!(values.safe(6), None);
    /// ```
    #[inline]
    fn safe(&self, index: usize) -> Option<&Self::Element> {
        if self.start_index() <= index && index < self.end_index() {
            Some(self.element(index))
        } else {
            None
        }
    }

    /// Returns the elements at each of `indices`, in the order the indices
    /// were given.
    ///
    /// Positions outside the container are dropped silently, so the result
    /// may be shorter than `indices` (or empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// let values = [5, 4, 3, 2, 1];
    /// assert_eq!(values.at([0, 1, 4]), vec![&5, &4, &1]);
    /// assert_eq!(values.at([1, 5, 90]), vec![&4]);
    /// assert!(values.at([90]).is_empty());
    /// ```
    fn at<I>(&self, indices: I) -> Vec<&Self::Element>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .filter_map(|index| self.safe(index))
            .collect()
    }

    /// Returns the elements at each of `indices`, or `None` as soon as one of
    /// them is outside the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// let values = [5, 4, 3, 2, 1];
    /// assert_eq!(values.at_all([4, 0]), Some(vec![&1, &5]));
    /// assert_eq!(values.at_all([1, 5]), None);
    /// ```
    fn at_all<I>(&self, indices: I) -> Option<Vec<&Self::Element>>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().map(|index| self.safe(index)).collect()
    }

    /// Returns the first element, or `None` if the container is empty.
    #[inline]
    fn head(&self) -> Option<&Self::Element> {
        self.safe(self.start_index())
    }

    /// Returns the last element, or `None` if the container is empty.
    ///
    /// For slices this agrees with the inherent `<[T]>::last`.
    #[inline]
    fn last(&self) -> Option<&Self::Element> {
        self.end_index()
            .checked_sub(1)
            .and_then(|index| self.safe(index))
    }

    /// Returns a view of every element except the last.
    ///
    /// Returns `None` for an empty container and a view of the single
    /// element for a one-element container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// assert_eq!([1, 3, 5, 7, 9, 11].initial(), Some(&[1, 3, 5, 7, 9][..]));
    /// assert_eq!([1].initial(), Some(&[1][..]));
    /// assert_eq!(Vec::<i32>::new().initial(), None);
    /// ```
    fn initial(&self) -> Option<Self::View<'_>> {
        let start = self.start_index();
        let end = self.end_index();
        match self.distance(start, end) {
            0 => None,
            1 => Some(self.view(start..end)),
            _ => Some(self.view(start..end - 1)),
        }
    }

    /// Returns a view of every element except the first.
    ///
    /// Returns `None` for an empty container and a view of the single
    /// element for a one-element container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    ///
    /// let animals = ["some", "mammals", "have", "tails"];
    /// assert_eq!(animals.tail(), Some(&["mammals", "have", "tails"][..]));
    /// assert_eq!(["tails"].tail(), Some(&["tails"][..]));
    /// ```
    fn tail(&self) -> Option<Self::View<'_>> {
        let start = self.start_index();
        let end = self.end_index();
        match self.distance(start, end) {
            0 => None,
            1 => Some(self.view(start..end)),
            _ => Some(self.view(start + 1..end)),
        }
    }

    /// Returns an element drawn uniformly at random from the container, or
    /// `None` if the container is empty.
    ///
    /// The generator is supplied by the caller; no global generator is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut random = StdRng::seed_from_u64(7);
    /// let values = [1, 2, 3];
    /// let drawn = values.sample(&mut random).unwrap();
    /// assert!(values.contains(drawn));
    ///
    /// assert_eq!(Vec::<i32>::new().sample(&mut random), None);
    /// ```
    #[cfg(feature = "random")]
    fn sample<R>(&self, random: &mut R) -> Option<&Self::Element>
    where
        R: rand::Rng + ?Sized,
    {
        let length = self.len_between();
        if length == 0 {
            return None;
        }
        let offset = random.random_range(0..length);
        tracing::trace!(length, offset, "sampled element");
        self.safe(self.start_index() + offset)
    }

    /// Splits the container into consecutive groups of `size` elements.
    ///
    /// The final group holds the remainder and is never empty unless the
    /// container itself is empty. When `size` is at least the length of the
    /// container, the result is a single group holding every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::SequenceExt;
    /// use std::num::NonZeroUsize;
    ///
    /// let words = ["This", "is", "a", "test"];
    /// let two = NonZeroUsize::new(2).unwrap();
    /// assert_eq!(words.chunk(two), vec![vec!["This", "is"], vec!["a", "test"]]);
    ///
    /// let ten = NonZeroUsize::new(10).unwrap();
    /// assert_eq!(words.chunk(ten), vec![words.to_vec()]);
    /// ```
    fn chunk(&self, size: NonZeroUsize) -> Vec<Vec<Self::Element>>
    where
        Self::Element: Clone,
    {
        let size = size.get();
        let end = self.end_index();
        let mut groups = Vec::with_capacity(self.len_between().div_ceil(size).max(1));
        let mut position = self.start_index();

        while self.distance(position, end) > size {
            groups.push(cloned_range(self, position..position + size));
            position += size;
        }
        groups.push(cloned_range(self, position..end));

        tracing::trace!(size, groups = groups.len(), "chunked sequence");
        groups
    }

    /// Like [`SequenceExt::chunk`], for a size that has not been checked yet.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkSizeError`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oriole::sequence::{ChunkSizeError, SequenceExt};
    ///
    /// let values = [1, 2, 3];
    /// assert_eq!(values.try_chunk(2), Ok(vec![vec![1, 2], vec![3]]));
    /// assert_eq!(values.try_chunk(0), Err(ChunkSizeError { requested: 0 }));
    /// ```
    fn try_chunk(&self, size: usize) -> Result<Vec<Vec<Self::Element>>, ChunkSizeError>
    where
        Self::Element: Clone,
    {
        NonZeroUsize::new(size)
            .map(|size| self.chunk(size))
            .ok_or_else(|| {
                tracing::debug!(requested = size, "rejected chunk size");
                ChunkSizeError { requested: size }
            })
    }
}

impl<C: RandomAccess + ?Sized> SequenceExt for C {}

fn cloned_range<C>(container: &C, range: Range<usize>) -> Vec<C::Element>
where
    C: RandomAccess + ?Sized,
    C::Element: Clone,
{
    range.map(|index| container.element(index).clone()).collect()
}

// =============================================================================
// Tests
// =============================================================================
