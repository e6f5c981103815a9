//! # Bidirectional Vocabulary/Index Mapping

use log::debug;

use crate::{
    errors::{VXResult, VocabdexError},
    types::{IndexType, VXHashIter, VXHashMap, VocabObject, hash_map_new},
};

/// A bidirectional mapping between vocabulary objects and contiguous
/// integer indexes.
///
/// Indexes are assigned in first-occurrence order of the seed sequence,
/// starting at `start`; duplicate seed items consume no indexes. The index
/// space occupied by the vocabulary is exactly `[start, start + len)`.
///
/// The value `start - 1` is the *sentinel*, standing for "object not in
/// vocabulary" in index-encoded output. Since assigned indexes are all
/// `>= start`, the sentinel never collides with a real index.
///
/// A `VocabIndex` is immutable once built; no method mutates it, so one
/// instance may be shared freely across threads.
#[derive(Clone, Debug)]
pub struct VocabIndex<V: VocabObject, T: IndexType = i64> {
    start: T,
    object_to_index: VXHashMap<V, T>,
    index_to_object: VXHashMap<T, V>,
}

impl<V: VocabObject, T: IndexType> VocabIndex<V, T> {
    /// Build a [`VocabIndex`] with indexes starting at 0.
    ///
    /// ## Arguments
    /// * `seed` - The vocabulary; may contain duplicates, may be empty.
    ///
    /// ## Returns
    /// A `Result<VocabIndex>`, with [`VocabdexError::IndexOverflow`] if the
    /// distinct seed items outnumber the indexes representable in `T`.
    pub fn new<I>(seed: I) -> VXResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        Self::with_start(seed, T::zero())
    }

    /// Build a [`VocabIndex`] with indexes starting at `start`.
    ///
    /// Indexes `[0, start)` are reserved (e.g. for padding/unknown
    /// sentinels of a downstream model) and never assigned to objects.
    ///
    /// ## Arguments
    /// * `seed` - The vocabulary; may contain duplicates, may be empty.
    /// * `start` - The first index to assign; must be `>= 0`.
    ///
    /// ## Returns
    /// A `Result<VocabIndex>`, with [`VocabdexError::NegativeStart`] for a
    /// negative `start`, and [`VocabdexError::IndexOverflow`] if a new
    /// object would need an index unrepresentable in `T`.
    pub fn with_start<I>(
        seed: I,
        start: T,
    ) -> VXResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        if start < T::zero() {
            return Err(VocabdexError::NegativeStart {
                start: start.to_string(),
            });
        }

        let mut object_to_index: VXHashMap<V, T> = hash_map_new();
        let mut index_to_object: VXHashMap<T, V> = hash_map_new();

        let mut next = Some(start);
        for item in seed {
            if object_to_index.contains_key(&item) {
                continue;
            }
            let index = next.ok_or_else(|| VocabdexError::IndexOverflow {
                size: object_to_index.len() + 1,
                start: start.to_string(),
            })?;
            index_to_object.insert(index, item.clone());
            object_to_index.insert(item, index);
            next = index.checked_add(&T::one());
        }

        debug!(
            "built vocab index: {} objects, start={start}",
            object_to_index.len()
        );

        Ok(Self {
            start,
            object_to_index,
            index_to_object,
        })
    }

    /// The first assigned index.
    pub fn start(&self) -> T {
        self.start
    }

    /// The sentinel index, `start - 1`, denoting "object not in vocabulary".
    ///
    /// Note: with the default `start = 0` the sentinel is `-1`, which is
    /// ambiguous if downstream code also uses `-1` for other purposes;
    /// choose a positive `start` in that case.
    pub fn sentinel(&self) -> T {
        self.start - T::one()
    }

    /// The number of distinct objects in the vocabulary.
    pub fn len(&self) -> usize {
        self.object_to_index.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.object_to_index.is_empty()
    }

    /// The width of binary encodings: `len() + start`.
    ///
    /// Binary vectors span the reserved low indexes plus one slot per
    /// vocabulary entry.
    pub fn width(&self) -> usize {
        // start >= 0 is a construction invariant.
        self.len() + self.start.to_usize().unwrap_or(0)
    }

    /// Returns true if `object` is in the vocabulary.
    pub fn contains(
        &self,
        object: &V,
    ) -> bool {
        self.object_to_index.contains_key(object)
    }

    /// Look up the index for `object`.
    pub fn lookup_index(
        &self,
        object: &V,
    ) -> Option<T> {
        self.object_to_index.get(object).copied()
    }

    /// Look up the object for `index`.
    pub fn lookup_object(
        &self,
        index: &T,
    ) -> Option<&V> {
        self.index_to_object.get(index)
    }

    /// Iterate over `(object, index)` entries, in arbitrary order.
    pub fn entries(&self) -> VXHashIter<'_, V, T> {
        self.object_to_index.iter()
    }

    /// Iterate over the vocabulary objects, in index order.
    pub fn objects(&self) -> impl Iterator<Item = &V> {
        let mut pairs: Vec<(&T, &V)> = self.index_to_object.iter().collect();
        pairs.sort_by_key(|&(&index, _)| index);
        pairs.into_iter().map(|(_, object)| object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        type T = i64;
        let index: VocabIndex<&str, T> = VocabIndex::new(["b", "a", "b", "c"]).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup_index(&"b"), Some(0));
        assert_eq!(index.lookup_index(&"a"), Some(1));
        assert_eq!(index.lookup_index(&"c"), Some(2));
        assert_eq!(index.lookup_index(&"d"), None);

        assert_eq!(index.lookup_object(&0), Some(&"b"));
        assert_eq!(index.lookup_object(&2), Some(&"c"));
        assert_eq!(index.lookup_object(&3), None);

        assert_eq!(
            index.objects().copied().collect::<Vec<_>>(),
            ["b", "a", "c"]
        );
    }

    #[test]
    fn test_start_offset() {
        type T = i32;
        let index: VocabIndex<char, T> = VocabIndex::with_start("xyz".chars(), 2).unwrap();

        assert_eq!(index.start(), 2);
        assert_eq!(index.sentinel(), 1);
        assert_eq!(index.lookup_index(&'x'), Some(2));
        assert_eq!(index.lookup_index(&'z'), Some(4));
        // Reserved low indexes map to nothing.
        assert_eq!(index.lookup_object(&0), None);
        assert_eq!(index.lookup_object(&1), None);
        assert_eq!(index.width(), 5);
    }

    #[test]
    fn test_empty_vocab() {
        type T = i64;
        let index: VocabIndex<String, T> = VocabIndex::new([]).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.sentinel(), -1);
        assert_eq!(index.width(), 0);
    }

    #[test]
    fn test_inverse_consistency() {
        type T = i64;
        let seed = ["to", "be", "or", "not", "to", "be"];
        let index: VocabIndex<&str, T> = VocabIndex::with_start(seed, 1).unwrap();

        assert_eq!(index.len(), 4);
        for (object, &i) in index.entries() {
            assert_eq!(index.lookup_object(&i), Some(object));
        }
    }

    #[test]
    fn test_negative_start() {
        type T = i64;
        let err = VocabIndex::<&str, T>::with_start(["a"], -3).unwrap_err();
        assert_eq!(
            err,
            VocabdexError::NegativeStart {
                start: "-3".into()
            }
        );
    }

    #[test]
    fn test_index_overflow() {
        type T = i8;
        // 0..=127 fit in i8; the 129th distinct object does not.
        let seed: Vec<i32> = (0..200).collect();
        let err = VocabIndex::<i32, T>::new(seed).unwrap_err();
        assert_eq!(
            err,
            VocabdexError::IndexOverflow {
                size: 129,
                start: "0".into()
            }
        );

        // Exactly filling the index space is fine.
        let seed: Vec<i32> = (0..128).collect();
        let index = VocabIndex::<i32, T>::new(seed).unwrap();
        assert_eq!(index.lookup_index(&127), Some(127));
    }

    #[test]
    fn test_send_sync_shared_lookups() {
        type T = i64;
        fn assert_send_sync<S: Send + Sync>(_: &S) {}

        let index: VocabIndex<String, T> =
            VocabIndex::new(["a".to_string(), "b".to_string()]).unwrap();
        assert_send_sync(&index);

        let index = std::sync::Arc::new(index);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = index.clone();
                std::thread::spawn(move || index.lookup_index(&"b".to_string()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Some(1));
        }
    }
}
