//! Hashing for elements whose digest can fail.
//!
//! Composition adds no failure of its own: elements are hashed in index
//! order and the first error is returned as-is.

use std::convert::Infallible;

use crate::combine::{SEED, combine_hash};

/// A type whose digest computation can fail.
pub trait TryHashValue {
    /// Error produced when the digest cannot be computed.
    type Error;

    /// Returns the digest of `self`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the value cannot be hashed.
    fn try_hash_value(&self) -> Result<u64, Self::Error>;
}

/// Returns the combined hash of a tuple of failable elements.
///
/// On success the result equals [`hash_tuple`](crate::hash_tuple) over the
/// same element digests.
///
/// # Errors
///
/// Returns the error of the first element (in index order) that fails.
#[inline]
pub fn try_hash_tuple<T: TryHashValue + ?Sized>(tuple: &T) -> Result<u64, T::Error> {
    tuple.try_hash_value()
}

impl TryHashValue for () {
    type Error = Infallible;

    #[inline]
    fn try_hash_value(&self) -> Result<u64, Infallible> {
        Ok(SEED)
    }
}

macro_rules! tuple_try_hash_value {
    ($($idx:tt $name:ident)+) => {
        impl<E, $($name: TryHashValue<Error = E>),+> TryHashValue for ($($name,)+) {
            type Error = E;

            #[inline]
            fn try_hash_value(&self) -> Result<u64, E> {
                let seed = SEED;
                $(let seed = combine_hash(seed, self.$idx.try_hash_value()?);)+
                Ok(seed)
            }
        }
    };
}

tuple_try_hash_value!(0 T0);
tuple_try_hash_value!(0 T0 1 T1);
tuple_try_hash_value!(0 T0 1 T1 2 T2);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10);
tuple_try_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11);
