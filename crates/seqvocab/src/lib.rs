//! # `seqvocab` Sequence Vocabulary Suite
//!
//! Vocabulary contract and byte-level codec for sequence-to-sequence
//! data pipelines.
//!
//! See:
//! * [`vocab`] for the [`Vocabulary`] contract and the [`ByteVocabulary`] codec.
//! * [`tensor`] for the batched representation and the host-call boundary.
//! * [`config`] for the default subword vocabulary provider.
//! * [`mixing`] for dataset mixing-rate functions.
//!
//! ## Id Space
//!
//! Every vocabulary reserves:
//! * ``0`` - padding, unconditionally.
//! * ``1`` - end-of-sequence, when `use_eos`.
//! * ``2`` - unknown, when `use_unk`.
//!
//! ``extra_ids`` sentinel ids are appended above the base vocabulary.
//!
//! ```rust
//! use seqvocab::{ByteVocabulary, Vocabulary};
//!
//! let vocab = ByteVocabulary::new(100);
//! assert_eq!(vocab.vocab_size(), 359);
//!
//! let ids = vocab.encode("hello");
//! assert_eq!(vocab.decode(&ids), "hello");
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod config;
pub mod errors;
pub mod mixing;
pub mod support;
pub mod tensor;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{VocabError, VocabResult};
#[doc(inline)]
pub use types::{EOS_ID, PAD_ID, TokenId, UNK_ID};
#[doc(inline)]
pub use vocab::{ByteVocabulary, Vocabulary, VocabularyOptions};
