//! # Default Vocabulary Configuration
//!
//! The default subword vocabulary is described, not built, here:
//! [`default_vocabulary`] returns a [`SentencePieceVocabularySpec`] naming
//! the model file and extra id count the external subword constructor
//! consumes.
//!
//! Configuration is held in a load-once, read-many process store
//! ([`config_store`]). Explicit overrides are passed as arguments rather
//! than by mutating shared state.
//!
//! Resolution order for the model path:
//! 1. an explicit override argument, if present and non-empty;
//! 2. the path of the stored [`VocabularyConfig`], which is either
//!    explicitly initialized, or built from the environment:
//!    1. ``$SEQVOCAB_VOCAB_PATH`` / ``$SEQVOCAB_EXTRA_IDS``;
//!    2. [`DEFAULT_SPM_PATH`] / [`DEFAULT_EXTRA_IDS`].

pub mod config_store;
pub mod vocab_config;

#[doc(inline)]
pub use config_store::{
    default_vocabulary,
    init_vocabulary_config,
    resolve_vocabulary_path,
    vocabulary_config,
};
#[doc(inline)]
pub use vocab_config::{SentencePieceVocabularySpec, VocabularyConfig};

/// The default subword model path.
pub const DEFAULT_SPM_PATH: &str = "gs://t5-data/vocabs/cc_all.32000/sentencepiece.model";

/// The default number of extra ids for the subword vocabulary.
pub const DEFAULT_EXTRA_IDS: usize = 100;

/// Environment variable key to override the default model path.
pub const SEQVOCAB_VOCAB_PATH: &str = "SEQVOCAB_VOCAB_PATH";

/// Environment variable key to override the default extra id count.
pub const SEQVOCAB_EXTRA_IDS: &str = "SEQVOCAB_EXTRA_IDS";
