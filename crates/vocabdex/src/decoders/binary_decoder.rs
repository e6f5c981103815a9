//! # Binary → Object Decodings

use crate::{
    matrix::Matrix,
    types::{IndexType, VocabObject},
    vocab::VocabIndex,
};

impl<V: VocabObject, T: IndexType> VocabIndex<V, T> {
    /// Map a binary vector back to the objects at its nonzero positions.
    ///
    /// Positions are scanned in ascending index order; any nonzero entry
    /// counts as set (multi-hot input is fine). Set positions with no
    /// associated object are silently dropped.
    pub fn binary_vector_to_objects(
        &self,
        vector: &[T],
    ) -> Vec<V> {
        vector
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit != T::zero())
            .filter_map(|(i, _)| {
                let index = T::from_usize(i)?;
                self.lookup_object(&index).cloned()
            })
            .collect()
    }

    /// Map a binary matrix back to rows of objects.
    ///
    /// Row-wise
    /// [`binary_vector_to_objects`](VocabIndex::binary_vector_to_objects).
    pub fn binary_matrix_to_objects(
        &self,
        matrix: &Matrix<T>,
    ) -> Vec<Vec<V>> {
        matrix
            .iter_rows()
            .map(|row| self.binary_vector_to_objects(row))
            .collect()
    }
}
