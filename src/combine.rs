//! Hash combining: folds one hash value into a running seed.
//!
//! Both variants follow a multiply / rotate-or-shift / xor pattern so that
//! a single-bit change in `value` spreads across the whole seed. All
//! arithmetic wraps.
//!
//! The 64-bit [`combine_hash`] is canonical (it matches [`Hasher::finish`])
//! and is the one re-exported at the crate root. [`combine_hash32`], the
//! `MurmurHash3` block mix, is a secondary path for callers holding 32-bit
//! hashes; it also backs [`combine_hash_usize`] on 32-bit targets. Both are
//! reached through this module only.
//!
//! [`Hasher::finish`]: std::hash::Hasher::finish

/// Initial seed of every combination sequence.
pub const SEED: u64 = 0;

/// Multiplier of the 64-bit variant (`MurmurHash64A`'s `m`).
pub const MULTIPLIER: u64 = 0xC6A4_A793_5BD1_E995;

/// Right-shift applied to the scrambled value in the 64-bit variant.
const SHIFT: u32 = 47;

/// Additive constant of both variants; keeps `(0, 0)` from hashing to `0`.
pub const OFFSET: u32 = 0xE654_6B64;

/// [`OFFSET`] widened for the 64-bit variant.
const OFFSET_64: u64 = 0xE654_6B64;

/// First `MurmurHash3` block constant.
pub const C1: u32 = 0xCC9E_2D51;

/// Second `MurmurHash3` block constant.
pub const C2: u32 = 0x1B87_3593;

/// Combines `value` into `seed` (64-bit).
///
/// Not commutative: `combine_hash(combine_hash(0, a), b)` differs from
/// `combine_hash(combine_hash(0, b), a)` whenever `a != b`, up to
/// 64-bit collisions.
#[must_use]
#[inline]
pub const fn combine_hash(seed: u64, value: u64) -> u64 {
    let mut value = value.wrapping_mul(MULTIPLIER);
    value ^= value >> SHIFT;
    value = value.wrapping_mul(MULTIPLIER);

    let seed = (seed ^ value).wrapping_mul(MULTIPLIER);
    seed.wrapping_add(OFFSET_64)
}

/// Combines `value` into `seed` (32-bit, `MurmurHash3` block mix).
///
/// Secondary to [`combine_hash`]; tuple hashing never uses it.
#[must_use]
#[inline]
pub const fn combine_hash32(seed: u32, value: u32) -> u32 {
    let value = value.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
    let seed = (seed ^ value).rotate_left(13);
    seed.wrapping_mul(5).wrapping_add(OFFSET)
}

/// Combines `value` into `seed` at the native word width.
#[cfg(target_pointer_width = "64")]
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn combine_hash_usize(seed: usize, value: usize) -> usize {
    combine_hash(seed as u64, value as u64) as usize
}

/// Combines `value` into `seed` at the native word width.
#[cfg(target_pointer_width = "32")]
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn combine_hash_usize(seed: usize, value: usize) -> usize {
    combine_hash32(seed as u32, value as u32) as usize
}

/// Folds [`combine_hash`] over `hashes` in order, starting from [`SEED`].
///
/// An empty sequence yields [`SEED`].
#[must_use]
pub fn fold_hashes<I>(hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    hashes.into_iter().fold(SEED, combine_hash)
}

/// Like [`fold_hashes`], but stops at the first `Err` and returns it
/// unchanged. Hashes after the failing one are never pulled.
///
/// # Errors
///
/// Returns the first error yielded by `hashes`.
pub fn try_fold_hashes<I, E>(hashes: I) -> Result<u64, E>
where
    I: IntoIterator<Item = Result<u64, E>>,
{
    hashes
        .into_iter()
        .try_fold(SEED, |seed, hash| Ok(combine_hash(seed, hash?)))
}
