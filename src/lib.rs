//! # oriole
//!
//! Extension traits that add convenience operations to Rust's standard
//! collections.
//!
//! ## Overview
//!
//! The standard library leaves a handful of everyday collection helpers to
//! the caller. This crate provides them as extension traits:
//!
//! - **Sequences**: Safe indexing, multi-index extraction, `head`/`last`,
//!   `initial`/`tail` views, random sampling and chunking
//! - **Predicates**: `every`, `some`, `none` and `find` over any container,
//!   ordered or not
//! - **Mappings**: `map_values`, `merge`, `pluck` and `omit` for `HashMap`
//!   and `BTreeMap`
//!
//! Every operation borrows its input and returns a new value (or a view into
//! the input). Missing elements are reported as `None`, never as a panic.
//!
//! ## Feature Flags
//!
//! - `sequence`: [`sequence::SequenceExt`] and [`sequence::RandomAccess`]
//! - `predicate`: [`predicate::PredicateExt`] and [`predicate::Iterable`]
//! - `mapping`: [`mapping::MappingExt`]
//! - `random`: `SequenceExt::sample` (pulls in `rand`)
//! - `smallvec`, `arrayvec`: Implementations for `SmallVec` and `ArrayVec`
//! - `fxhash`, `ahash`: The `mapping::FastHashMap` alias
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use oriole::prelude::*;
//! use std::collections::HashMap;
//!
//! let values = vec![5, 4, 3, 2, 1];
//! assert_eq!(values.at([1, 5, 90]), vec![&4]);
//! assert!(values.every(|value| *value > 0));
//!
//! let dictionary = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
//! assert_eq!(dictionary.omit(["c"]), HashMap::from([("a", 1), ("b", 2)]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every extension trait.
///
/// # Usage
///
/// ```rust
/// use oriole::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "mapping")]
pub mod mapping;
