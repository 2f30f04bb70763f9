//! Operations on ordered, randomly indexable sequences.
//!
//! This module provides:
//!
//! - [`RandomAccess`]: The capability trait a container implements to take
//!   part (start index, end index, distance, positional access, views)
//! - [`SequenceExt`]: Safe indexing, multi-index extraction, `head`/`last`,
//!   `initial`/`tail` views, random sampling and chunking
//! - [`ChunkSizeError`]: The error returned for a chunk size of zero
//!
//! `RandomAccess` is implemented for slices, `Vec`, arrays and `VecDeque`,
//! plus `SmallVec` and `ArrayVec` behind the `smallvec` and `arrayvec`
//! features.
//!
//! # Absence Instead of Panics
//!
//! Out-of-range positions and empty inputs never panic. They produce `None`,
//! or an empty `Vec` where a sequence of results is expected.
//!
//! # Examples
//!
//! ```rust
//! use oriole::sequence::SequenceExt;
//!
//! let values = vec![8, 6, 7, 5, 3, 0, 9];
//! assert_eq!(values.head(), Some(&8));
//! assert_eq!(values.safe(100), None);
//! assert_eq!(values.at([0, 2, 100]), vec![&8, &7]);
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(empty.head(), None);
//! assert_eq!(empty.tail(), None);
//! ```

mod error;
mod random_access;
mod sequence_ext;

pub use error::ChunkSizeError;
pub use random_access::RandomAccess;
pub use sequence_ext::SequenceExt;
