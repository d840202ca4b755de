//! Tuple hash composition.
//!
//! A tuple hashes as `fold_hashes([h(t.0), h(t.1), ..])`: element digests
//! are materialized in index order and folded from seed `0`. The empty
//! tuple therefore hashes to `0`, and swapping two distinct elements
//! changes the result.

use crate::HashValue;
use crate::combine::{SEED, fold_hashes};

/// Returns the combined hash of a tuple (or any other [`HashValue`]).
///
/// ```
/// use tuple_hash::hash_tuple;
///
/// assert_eq!(hash_tuple(&()), 0);
/// assert_ne!(hash_tuple(&(1, 3)), hash_tuple(&(3, 1)));
/// ```
#[must_use]
#[inline]
pub fn hash_tuple<T: HashValue + ?Sized>(tuple: &T) -> u64 {
    tuple.hash_value()
}

impl HashValue for () {
    #[inline]
    fn hash_value(&self) -> u64 {
        SEED
    }
}

macro_rules! tuple_hash_value {
    ($($idx:tt $name:ident)+) => {
        impl<$($name: HashValue),+> HashValue for ($($name,)+) {
            #[inline]
            fn hash_value(&self) -> u64 {
                fold_hashes([$(self.$idx.hash_value()),+])
            }
        }
    };
}

tuple_hash_value!(0 T0);
tuple_hash_value!(0 T0 1 T1);
tuple_hash_value!(0 T0 1 T1 2 T2);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10);
tuple_hash_value!(0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11);
