//! Order-sensitive hash combining for heterogeneous tuples.
//!
//! [`combine_hash`] mixes one hash value into a running seed;
//! [`hash_tuple`] folds it over every element of a tuple, left to right,
//! starting from seed `0`.
//!
//! # Key properties
//!
//! - **Order-sensitive**: `(a, b)` and `(b, a)` hash differently for `a != b`
//! - **Deterministic**: no per-process random state in the combiner
//! - **Zero-safe**: `combine_hash(0, 0) != 0`
//! - **Pluggable**: any type joins in by implementing [`HashValue`]
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! Not a cryptographic hash.
//!
//! ```
//! use tuple_hash::{TupleHashSet, TupleKey, hash_tuple};
//!
//! let mut seen = TupleHashSet::default();
//! seen.insert(TupleKey((1, 3, "hello")));
//! assert!(seen.contains(&TupleKey((1, 3, "hello"))));
//! assert!(!seen.contains(&TupleKey((3, 1, "hello"))));
//!
//! assert_eq!(hash_tuple(&(1, 2.3)), hash_tuple(&(1, 2.3)));
//! ```
//!
//! # References
//!
//! - Appleby, `MurmurHash3` block mix (32-bit variant)
//! - Appleby, `MurmurHash64A` (64-bit multiplier and shift)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod combine;
pub mod fallible;
pub mod key;
pub mod tuple;
pub mod value;

#[cfg(test)]
mod tests;

pub use combine::{combine_hash, fold_hashes, try_fold_hashes};
pub use fallible::{TryHashValue, try_hash_tuple};
pub use key::{BuildPassThroughHasher, PassThroughHasher, TupleHashMap, TupleHashSet, TupleKey};
pub use tuple::hash_tuple;
pub use value::{HashValue, hash_one};
