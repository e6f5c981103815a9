//! # Numeric → Object Decoding Operations
//!
//! Decoding mirrors the two encoding shapes:
//! * index decodings ([`index_decoder`]) - one object per known index;
//! * binary decodings ([`binary_decoder`]) - objects at the set bits, in
//!   ascending index order.
//!
//! In both, indexes with no associated object are silently dropped, never
//! an error. All operations are methods on [`crate::vocab::VocabIndex`].

pub mod binary_decoder;
pub mod index_decoder;
