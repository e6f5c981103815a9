//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{CheckedAdd, FromPrimitive, PrimInt, Signed, ToPrimitive};

/// A type that can be used as an index in a vocabulary index.
///
/// These are constrained to be signed primitive integers: the "unknown
/// object" sentinel is `start - 1`, which is `-1` for the common
/// `start = 0` case.
pub trait IndexType:
    'static
    + PrimInt
    + Signed
    + CheckedAdd
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + Signed
        + CheckedAdd
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A type that can be used as a vocabulary object.
///
/// Anything equality-comparable, hashable, and clonable qualifies; there is
/// a blanket impl, so this is never implemented by hand.
pub trait VocabObject: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<V> VocabObject for V where V: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VXHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VXHashMap<K, V> {
            VXHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VXHashMap<K, V> {
            VXHashMap::with_capacity(capacity)
        }

        /// Iterator over hash map entries.
        ///
        /// Note: `ahash::AHashMap` is a specialization of `std::collections::HashMap`.
        pub type VXHashIter<'a, K, V> = std::collections::hash_map::Iter<'a, K, V>;

        /// Type Alias for hash sets in this crate.
        pub type VXHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type VXHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VXHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VXHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Iterator over hash map entries.
        ///
        /// Note: `foldhash::HashMap` is a specialization of `std::collections::HashMap`.
        pub type VXHashIter<'a, K, V> = std::collections::hash_map::Iter<'a, K, V>;

        /// Type Alias for hash sets in this crate.
        pub type VXHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type VXHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VXHashMap<K, V> {
            VXHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VXHashMap<K, V> {
            VXHashMap::with_capacity(capacity)
        }

        /// Iterator over hash map entries.
        pub type VXHashIter<'a, K, V> = std::collections::hash_map::Iter<'a, K, V>;

        /// Type Alias for hash sets in this crate.
        pub type VXHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_index_types() {
        struct IsIndex<T: IndexType>(PhantomData<T>);

        let _: IsIndex<i8>;
        let _: IsIndex<i16>;
        let _: IsIndex<i32>;
        let _: IsIndex<i64>;
        let _: IsIndex<isize>;
    }

    #[test]
    fn test_common_object_types() {
        struct IsObject<V: VocabObject>(PhantomData<V>);

        let _: IsObject<String>;
        let _: IsObject<&'static str>;
        let _: IsObject<char>;
        let _: IsObject<u64>;
        let _: IsObject<Vec<u8>>;
    }

    #[test]
    fn test_hash_map_aliases() {
        let mut map: VXHashMap<&str, i32> = hash_map_new();
        map.insert("a", 1);
        assert_eq!(map.get("a"), Some(&1));

        let map: VXHashMap<&str, i32> = hash_map_with_capacity(16);
        assert!(map.is_empty());
    }
}
