//! # Error Types

/// Errors from vocabdex operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VocabdexError {
    /// The vocabulary needs more indexes than the index type can represent.
    #[error("vocab size ({size}) starting at {start} exceeds index type capacity")]
    IndexOverflow {
        /// The number of distinct objects that could not be indexed.
        size: usize,
        /// The requested start offset.
        start: String,
    },

    /// The start offset is negative.
    #[error("start offset ({start}) must be >= 0")]
    NegativeStart {
        /// The requested start offset.
        start: String,
    },

    /// An index matrix was requested for zero rows of input.
    ///
    /// The matrix width is the maximum row length, which is undefined for
    /// zero rows.
    #[error("cannot build an index matrix from zero rows")]
    EmptyIndexMatrix,

    /// Matrix construction was given rows of differing lengths.
    #[error("ragged rows: row {row} has length {len}, expected {expected}")]
    RaggedRows {
        /// The offending row.
        row: usize,
        /// The offending row's length.
        len: usize,
        /// The length of row 0.
        expected: usize,
    },
}

/// Result type for vocabdex operations.
pub type VXResult<T> = core::result::Result<T, VocabdexError>;
