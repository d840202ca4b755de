//! `TupleKey` in std maps and sets, and the pass-through hasher.

use std::hash::{BuildHasher, Hasher};

use crate::{
    BuildPassThroughHasher, PassThroughHasher, TupleHashMap, TupleHashSet, TupleKey, combine_hash,
    hash_tuple,
};

#[test]
fn key_hash_is_tuple_hash() {
    let key = TupleKey((1_i32, 3_i32, "hello"));
    let build = BuildPassThroughHasher::default();
    assert_eq!(build.hash_one(key), hash_tuple(&(1_i32, 3_i32, "hello")));
}

#[test]
fn map_insert_and_get() {
    let mut map = TupleHashMap::default();
    map.insert(TupleKey(("numpy", 1_u32, 26_u32)), "py312");
    map.insert(TupleKey(("numpy", 2_u32, 1_u32)), "py313");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&TupleKey(("numpy", 1_u32, 26_u32))), Some(&"py312"));
    assert_eq!(map.get(&TupleKey(("numpy", 26_u32, 1_u32))), None);
}

#[test]
fn map_overwrite_keeps_single_entry() {
    let mut map: TupleHashMap<(i32, i32), &str> = TupleHashMap::default();
    assert_eq!(map.insert(TupleKey((1, 2)), "a"), None);
    assert_eq!(map.insert(TupleKey((1, 2)), "b"), Some("a"));
    assert_eq!(map.len(), 1);
}

#[test]
fn set_distinguishes_order() {
    let mut set = TupleHashSet::default();
    assert!(set.insert(TupleKey((1_i32, 3_i32))));
    assert!(set.insert(TupleKey((3_i32, 1_i32))));
    assert!(!set.insert(TupleKey((1_i32, 3_i32))));
    assert_eq!(set.len(), 2);
}

#[test]
fn set_with_many_keys() {
    let set: TupleHashSet<(u32, u32)> = (0..64)
        .flat_map(|a| (0..64).map(move |b| TupleKey((a, b))))
        .collect();
    assert_eq!(set.len(), 64 * 64);
    assert!(set.contains(&TupleKey((63_u32, 0_u32))));
}

#[test]
fn key_accessors() {
    let key = TupleKey::new((1_u8, 'a'));
    assert_eq!(key.get(), &(1, 'a'));
    assert_eq!(TupleKey::from((1_u8, 'a')), key);
    assert_eq!(key.into_inner(), (1, 'a'));
}

/// Unwrapping a key that owns heap data hands the data back intact.
#[test]
fn into_inner_returns_owned_contents() {
    let key = TupleKey::new((String::from("numpy"), 2_u32));
    let (name, major) = key.into_inner();
    assert_eq!(name, "numpy");
    assert_eq!(major, 2);
}

#[test]
fn key_ordering_follows_contents() {
    assert!(TupleKey((1, 2)) < TupleKey((1, 3)));
    assert!(TupleKey((2, 0)) > TupleKey((1, 9)));
}

// ---------------------------------------------------------------------------
// PassThroughHasher
// ---------------------------------------------------------------------------

#[test]
fn fresh_hasher_finishes_zero() {
    assert_eq!(PassThroughHasher::default().finish(), 0);
}

#[test]
fn single_u64_passes_through() {
    let mut hasher = PassThroughHasher::default();
    hasher.write_u64(0xDEAD_BEEF);
    assert_eq!(hasher.finish(), 0xDEAD_BEEF);
}

#[test]
fn second_u64_is_combined() {
    let mut hasher = PassThroughHasher::default();
    hasher.write_u64(1);
    hasher.write_u64(2);
    assert_eq!(hasher.finish(), combine_hash(1, 2));
}

#[test]
fn bytes_fold_in_le_chunks() {
    let mut hasher = PassThroughHasher::default();
    hasher.write(&[1, 0, 0, 0, 0, 0, 0, 0, 2]);
    assert_eq!(hasher.finish(), combine_hash(combine_hash(0, 1), 2));
}

#[test]
fn byte_write_marks_hasher_written() {
    let mut hasher = PassThroughHasher::default();
    hasher.write(&[]);
    hasher.write_u64(5);
    assert_eq!(hasher.finish(), combine_hash(0, 5));
}
