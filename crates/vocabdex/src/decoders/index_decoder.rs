//! # Index → Object Decodings

use crate::{
    matrix::Matrix,
    types::{IndexType, VocabObject},
    vocab::VocabIndex,
};

impl<V: VocabObject, T: IndexType> VocabIndex<V, T> {
    /// Map each index back to its object.
    ///
    /// Indexes with no associated object (the sentinel, reserved low
    /// indexes, out-of-range values) are silently dropped, so the output
    /// may be shorter than the input. Order is preserved among the
    /// emitted objects.
    pub fn indexes_to_objects(
        &self,
        indexes: &[T],
    ) -> Vec<V> {
        indexes
            .iter()
            .filter_map(|index| self.lookup_object(index).cloned())
            .collect()
    }

    /// Map a matrix of indexes back to rows of objects.
    ///
    /// Row-wise [`indexes_to_objects`](VocabIndex::indexes_to_objects);
    /// rows in the output may have differing lengths.
    pub fn index_matrix_to_objects(
        &self,
        matrix: &Matrix<T>,
    ) -> Vec<Vec<V>> {
        matrix
            .iter_rows()
            .map(|row| self.indexes_to_objects(row))
            .collect()
    }
}
