//! `HashValue`: the per-element hash capability.
//!
//! A type is usable as a tuple element once it can produce a 64-bit digest
//! of itself. Built-in types go through the standard hasher; floats hash
//! their bit pattern.

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

/// A type that produces a deterministic 64-bit digest of its value.
///
/// Equal values must produce equal digests. Implement it directly for
/// custom digests, or use [`hash_value_via_std!`](crate::hash_value_via_std)
/// for types that already implement [`Hash`].
pub trait HashValue {
    /// Returns the digest of `self`.
    fn hash_value(&self) -> u64;
}

/// Computes the 64-bit hash of a value using the standard hasher.
///
/// Stable for the lifetime of the process; not guaranteed across Rust
/// releases.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Implements [`HashValue`] through [`hash_one`] for types that implement
/// [`Hash`].
///
/// ```
/// use tuple_hash::{HashValue, hash_one, hash_value_via_std};
///
/// #[derive(Hash)]
/// struct PackageName(String);
///
/// hash_value_via_std!(PackageName);
///
/// let name = PackageName("numpy".to_owned());
/// assert_eq!(name.hash_value(), hash_one(&name));
/// ```
#[macro_export]
macro_rules! hash_value_via_std {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::HashValue for $ty {
                #[inline]
                fn hash_value(&self) -> u64 {
                    $crate::hash_one(self)
                }
            }
        )+
    };
}

hash_value_via_std!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

impl HashValue for Cow<'_, str> {
    #[inline]
    fn hash_value(&self) -> u64 {
        hash_one(self.as_ref())
    }
}

// -0.0 == 0.0, so both must share a digest. NaN payloads hash by bits.

impl HashValue for f32 {
    #[inline]
    fn hash_value(&self) -> u64 {
        let bits = if *self == 0.0 { 0 } else { self.to_bits() };
        hash_one(&bits)
    }
}

impl HashValue for f64 {
    #[inline]
    fn hash_value(&self) -> u64 {
        let bits = if *self == 0.0 { 0 } else { self.to_bits() };
        hash_one(&bits)
    }
}

// ---------------------------------------------------------------------------
// Forwarding impls
// ---------------------------------------------------------------------------

macro_rules! forward_hash_value {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<T: HashValue + ?Sized> HashValue for $wrapper {
                #[inline]
                fn hash_value(&self) -> u64 {
                    (**self).hash_value()
                }
            }
        )+
    };
}

forward_hash_value!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
