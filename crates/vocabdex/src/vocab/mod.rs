//! # Vocabulary Index
//!
//! This module provides [`VocabIndex`], the bidirectional mapping between
//! vocabulary objects and contiguous integer indexes.
//!
//! The encode/decode operations live in [`crate::encoders`] and
//! [`crate::decoders`], but are all methods on [`VocabIndex`].

pub mod vocab_index;

#[doc(inline)]
pub use vocab_index::VocabIndex;
