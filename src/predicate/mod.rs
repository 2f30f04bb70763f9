//! Predicate operations over any finite container.
//!
//! This module provides:
//!
//! - [`Iterable`]: The capability trait (borrowing iteration, nothing else)
//! - [`PredicateExt`]: `every`, `some`, `none` and `find`
//!
//! Both ordered containers (slices, `Vec`, `VecDeque`, `LinkedList`) and
//! unordered ones (`HashSet`, `BTreeSet`, `BinaryHeap`) are supported. For
//! unordered containers, `find` returns the first match in the container's
//! iteration order.
//!
//! # Examples
//!
//! ```rust
//! use oriole::predicate::PredicateExt;
//!
//! let values = vec![8, 6, 7, 5, 3, 0, 9];
//! assert!(values.some(|value| *value == 0));
//! assert!(values.every(|value| *value < 10));
//! assert_eq!(values.find(|value| *value < 7), Some(&6));
//! ```

mod iterable;
mod predicate_ext;

pub use iterable::Iterable;
pub use predicate_ext::PredicateExt;
