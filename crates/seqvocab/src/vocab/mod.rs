//! # Vocabulary
//!
//! This module provides the vocabulary contract and the byte-level codec.
//!
//! ## Vocabulary Contract
//!
//! [`Vocabulary`] defines the id-space layout and the shared encode/decode
//! logic; a concrete vocabulary supplies:
//! * `base_vocab_size` - ids for specials plus content, excluding extra ids,
//! * a scalar codec pair, and
//! * a batched codec pair over [`crate::tensor`] values.
//!
//! ## Byte Vocabulary
//!
//! [`ByteVocabulary`] maps the UTF-8 bytes of text directly to ids,
//! shifted past the three special ids.
pub mod byte_vocab;
pub mod vocab_options;
pub mod vocabulary;

#[doc(inline)]
pub use byte_vocab::ByteVocabulary;
#[doc(inline)]
pub use vocab_options::VocabularyOptions;
#[doc(inline)]
pub use vocabulary::Vocabulary;
