//! # Objects → Index Encodings

use crate::{
    errors::{VXResult, VocabdexError},
    matrix::Matrix,
    types::{IndexType, VocabObject},
    vocab::VocabIndex,
};

impl<V: VocabObject, T: IndexType> VocabIndex<V, T> {
    /// Map each object to its index.
    ///
    /// Objects absent from the vocabulary map to the sentinel `start - 1`.
    /// Output length equals input length; order is preserved.
    pub fn objects_to_indexes(
        &self,
        objects: &[V],
    ) -> Vec<T> {
        objects
            .iter()
            .map(|object| self.lookup_index(object).unwrap_or_else(|| self.sentinel()))
            .collect()
    }

    /// Map rows of objects to a matrix of indexes.
    ///
    /// The matrix width is the maximum row length; shorter rows are
    /// right-padded with the sentinel `start - 1`. Row order and
    /// within-row order are preserved.
    ///
    /// ## Arguments
    /// * `rows` - At least one row of objects; rows may differ in length
    ///   and may be empty.
    ///
    /// ## Returns
    /// A `Result<Matrix<T>>`, with [`VocabdexError::EmptyIndexMatrix`] for
    /// zero rows (whose maximum row length is undefined).
    pub fn objects_to_index_matrix<S>(
        &self,
        rows: &[S],
    ) -> VXResult<Matrix<T>>
    where
        S: AsRef<[V]>,
    {
        if rows.is_empty() {
            return Err(VocabdexError::EmptyIndexMatrix);
        }

        let cols = rows
            .iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0);

        let mut matrix = Matrix::full(rows.len(), cols, self.sentinel());
        for (i, row) in rows.iter().enumerate() {
            let indexes = self.objects_to_indexes(row.as_ref());
            matrix.row_mut(i)[..indexes.len()].copy_from_slice(&indexes);
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_to_indexes() {
        type T = i64;
        let index: VocabIndex<&str, T> = VocabIndex::new(["a", "b", "c"]).unwrap();

        assert_eq!(index.objects_to_indexes(&["c", "a", "a"]), [2, 0, 0]);
        assert_eq!(index.objects_to_indexes(&[]), Vec::<T>::new());

        // Unknown objects become the sentinel, in place.
        assert_eq!(index.objects_to_indexes(&["a", "zzz", "b"]), [0, -1, 1]);
    }

    #[test]
    fn test_sentinel_tracks_start() {
        type T = i64;
        for start in [0, 1, 5] {
            let index: VocabIndex<&str, T> =
                VocabIndex::with_start(["a"], start).unwrap();
            assert_eq!(index.objects_to_indexes(&["__unseen__"]), [start - 1]);
        }
    }

    #[test]
    fn test_index_matrix_padding() {
        type T = i64;
        let index: VocabIndex<&str, T> = VocabIndex::new(["a", "b", "c"]).unwrap();

        let matrix = index
            .objects_to_index_matrix(&[vec!["a"], vec!["a", "b", "c"]])
            .unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
        assert_eq!(matrix.row(0), &[0, -1, -1]);
        assert_eq!(matrix.row(1), &[0, 1, 2]);
    }

    #[test]
    fn test_index_matrix_empty_rows() {
        type T = i64;
        let index: VocabIndex<&str, T> = VocabIndex::new(["a"]).unwrap();

        // Zero rows: the width is undefined.
        let err = index.objects_to_index_matrix::<Vec<&str>>(&[]).unwrap_err();
        assert_eq!(err, VocabdexError::EmptyIndexMatrix);

        // All-empty rows are fine: a rows x 0 matrix.
        let matrix = index
            .objects_to_index_matrix(&[Vec::<&str>::new(), vec![]])
            .unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (2, 0));
    }

    #[test]
    fn test_index_matrix_all_unknown() {
        type T = i32;
        let index: VocabIndex<&str, T> = VocabIndex::with_start(["a"], 1).unwrap();

        let matrix = index
            .objects_to_index_matrix(&[vec!["x", "y"], vec!["z"]])
            .unwrap();
        assert_eq!(matrix.as_slice(), &[0, 0, 0, 0]);
    }
}
