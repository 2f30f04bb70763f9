//! Operations on key-value maps.
//!
//! This module provides [`MappingExt`], implemented for `HashMap` (with any
//! `BuildHasher`) and `BTreeMap`:
//!
//! - `map_values` / `map_values_with_key`: Transform every value, keep keys
//! - `merge` / `merge_with`: Union of two maps, right-hand side wins or a
//!   resolver decides
//! - `pluck`: Keep only whitelisted keys
//! - `omit`: Drop blacklisted keys
//!
//! `pluck` and `omit` partition a map: for the same key list their results
//! are disjoint and their union is the original map.
//!
//! # Fast Hashing
//!
//! With the `fxhash` or `ahash` feature enabled, `FastHashMap` names a
//! `HashMap` using that crate's hasher. Operations on a `FastHashMap` return
//! `FastHashMap`s.
//!
//! # Examples
//!
//! ```rust
//! use oriole::mapping::MappingExt;
//! use std::collections::HashMap;
//!
//! let settings = HashMap::from([("host", "localhost"), ("port", "8080"), ("secret", "hunter2")]);
//! let overrides = HashMap::from([("port", "9090")]);
//!
//! let public = settings.merge(&overrides).omit(["secret"]);
//! assert_eq!(public, HashMap::from([("host", "localhost"), ("port", "9090")]));
//! ```

mod btree_map;
mod hash_map;
mod mapping_ext;

pub use mapping_ext::MappingExt;

/// A `HashMap` using the `rustc-hash` hasher.
#[cfg(feature = "fxhash")]
pub type FastHashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

/// A `HashMap` using the `ahash` hasher.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
