//! # Object → Numeric Encoding Operations
//!
//! Encoding comes in two shapes:
//! * index encodings ([`index_encoder`]) - one integer per input object,
//!   with the sentinel `start - 1` standing in for unknown objects;
//! * binary encodings ([`binary_encoder`]) - fixed-width one-hot/multi-hot
//!   vectors, where unknown objects are silently ignored.
//!
//! All operations are methods on [`crate::vocab::VocabIndex`].

pub mod binary_encoder;
pub mod index_encoder;
