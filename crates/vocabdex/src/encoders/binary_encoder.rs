//! # Objects → Binary (One-Hot/Multi-Hot) Encodings
//!
//! Binary encodings are fixed-width: `vocab len + start` slots, spanning
//! the reserved low indexes plus one slot per vocabulary entry. Entries
//! are 0/1 integers of the index type, not booleans, to match downstream
//! numeric consumers.

use crate::{
    matrix::Matrix,
    types::{IndexType, VocabObject},
    vocab::VocabIndex,
};

impl<V: VocabObject, T: IndexType> VocabIndex<V, T> {
    /// Encode objects as a one-hot/multi-hot vector of width
    /// [`width()`](VocabIndex::width).
    ///
    /// Each known input object sets the bit at its index; repeats set it
    /// once (idempotent). Unknown objects are silently ignored; no
    /// sentinel bit exists in the binary encoding.
    pub fn objects_to_binary_vector(
        &self,
        objects: &[V],
    ) -> Vec<T> {
        let mut vector = vec![T::zero(); self.width()];
        self.set_bits(&mut vector, objects);
        vector
    }

    /// Encode rows of objects as a binary matrix.
    ///
    /// All rows share the fixed width [`width()`](VocabIndex::width), so
    /// zero rows are fine (a `0 x width` matrix) and no padding applies.
    pub fn objects_to_binary_matrix<S>(
        &self,
        rows: &[S],
    ) -> Matrix<T>
    where
        S: AsRef<[V]>,
    {
        let mut matrix = Matrix::full(rows.len(), self.width(), T::zero());
        for (i, row) in rows.iter().enumerate() {
            self.set_bits(matrix.row_mut(i), row.as_ref());
        }
        matrix
    }

    fn set_bits(
        &self,
        slots: &mut [T],
        objects: &[V],
    ) {
        for object in objects {
            if let Some(i) = self.lookup_index(object).and_then(|index| index.to_usize()) {
                slots[i] = T::one();
            }
        }
    }
}
