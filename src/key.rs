//! Using combined tuple hashes as std `HashMap` / `HashSet` keys.
//!
//! [`TupleKey`] feeds `hash_tuple(key)` to the map's hasher as a single
//! `u64`; [`PassThroughHasher`] hands that value back untouched, so the
//! bucket hash is exactly the combined hash.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash, Hasher};

use crate::HashValue;
use crate::combine::combine_hash;

/// Key wrapper hashing its contents with [`HashValue`].
///
/// Equality and ordering are those of the wrapped value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TupleKey<T>(pub T);

impl<T> TupleKey<T> {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a reference to the wrapped value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: HashValue> Hash for TupleKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash_value());
    }
}

impl<T> From<T> for TupleKey<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Hasher returning a single written `u64` unchanged.
///
/// A second write, or any byte write, is folded in with [`combine_hash`]
/// (bytes in 8-byte little-endian chunks, the last one zero-padded).
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
    written: bool,
}

impl Hasher for PassThroughHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.written = true;
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.state = combine_hash(self.state, u64::from_le_bytes(word));
        }
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.state = if self.written {
            combine_hash(self.state, value)
        } else {
            value
        };
        self.written = true;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// [`BuildHasher`](std::hash::BuildHasher) for [`PassThroughHasher`].
pub type BuildPassThroughHasher = BuildHasherDefault<PassThroughHasher>;

/// `HashMap` keyed by tuples hashed with [`hash_tuple`](crate::hash_tuple).
pub type TupleHashMap<K, V> = HashMap<TupleKey<K>, V, BuildPassThroughHasher>;

/// `HashSet` of tuples hashed with [`hash_tuple`](crate::hash_tuple).
pub type TupleHashSet<K> = HashSet<TupleKey<K>, BuildPassThroughHasher>;
