//! # `vocabdex` Vocabulary Indexing Library
//!
//! `vocabdex` builds a stable bidirectional mapping between a vocabulary of
//! arbitrary hashable objects (tokens, labels, chars, …) and contiguous
//! integer indexes; and provides vectorized conversions between object
//! sequences and their numeric encodings.
//!
//! See:
//! * [`vocab::VocabIndex`] to build and query a vocabulary index.
//! * [`encoders`] for the objects → indexes and objects → one-hot operations.
//! * [`decoders`] for the indexes → objects and one-hot → objects operations.
//! * [`matrix::Matrix`] for the dense row-major container used by the 2-D
//!   operations.
//!
//! A [`VocabIndex`](vocab::VocabIndex) is immutable once built; encoding and
//! decoding never mutate it, so one instance may be shared across threads
//! without locking.
//!
//! ```rust
//! use vocabdex::VocabIndex;
//!
//! type T = i64;
//!
//! let index: VocabIndex<&str, T> =
//!     VocabIndex::new(["the", "cat", "sat", "the"]).unwrap();
//!
//! assert_eq!(index.objects_to_indexes(&["cat", "sat", "dog"]), [1, 2, -1]);
//! assert_eq!(index.indexes_to_objects(&[2, 0, 999]), ["sat", "the"]);
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap`/`HashSet` implementations for ``ahash``; which is
//! a performance win on many/(most?) modern CPUs.
//!
//! If both "ahash" and "foldhash" are enabled, then "ahash" will win.
//!
//! This is done by the ``types::VXHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! See ``ahash``; this swaps all `HashMap`/`HashSet` implementations for
//! ``foldhash``.
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod matrix;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{VXResult, VocabdexError};
#[doc(inline)]
pub use matrix::Matrix;
#[doc(inline)]
pub use vocab::VocabIndex;
