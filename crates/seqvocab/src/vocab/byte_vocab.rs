//! # Byte Vocabulary

use core::fmt::Debug;

use crate::{
    TokenId,
    VocabResult,
    support::strings::string_from_utf8_ignore,
    tensor::{IdTensor, StringScalar, host_call, ops},
    vocab::{Vocabulary, VocabularyOptions},
};

/// The number of byte values.
pub const BYTE_SIZE: usize = 256;

/// The number of special ids: ``0=PAD, 1=EOS, 2=UNK``.
pub const NUM_SPECIAL_TOKENS: usize = 3;

const BYTE_ID_OFFSET: TokenId = NUM_SPECIAL_TOKENS as TokenId;
const BYTE_ID_END: TokenId = (NUM_SPECIAL_TOKENS + BYTE_SIZE) as TokenId;

/// Byte-level vocabulary.
///
/// Maps each UTF-8 byte ``b`` to id ``b + 3``, leaving ``0..3`` for
/// the special ids. Extra ids sit at ``259..259 + extra_ids``.
///
/// Special and extra ids never appear in decoded text; neither do
/// malformed UTF-8 sequences.
///
/// ## Equality
///
/// `==` compares only `extra_ids`. Two byte vocabularies with the same
/// extra id count compare equal even when their other options differ.
/// Use [`ByteVocabulary::structurally_eq`] to compare all options.
#[derive(Clone, Copy)]
pub struct ByteVocabulary {
    options: VocabularyOptions,
}

impl Debug for ByteVocabulary {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteVocabulary")
            .field("vocab_size", &self.vocab_size())
            .field("options", &self.options)
            .finish()
    }
}

impl Default for ByteVocabulary {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PartialEq for ByteVocabulary {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.extra_ids() == other.extra_ids()
    }
}

impl ByteVocabulary {
    /// Create a byte vocabulary with `extra_ids` sentinel ids.
    ///
    /// EOS and UNK handling are both enabled.
    pub fn new(extra_ids: usize) -> Self {
        Self::from_options(VocabularyOptions::default().with_extra_ids(extra_ids))
    }

    /// Create a byte vocabulary from explicit options.
    ///
    /// ids ``0..3`` stay reserved whatever `use_eos` / `use_unk` say;
    /// the flags only control decode-time cleanup.
    pub fn from_options(options: VocabularyOptions) -> Self {
        Self { options }
    }

    /// Compare every construction option, not just `extra_ids`.
    pub fn structurally_eq(
        &self,
        other: &Self,
    ) -> bool {
        self.options == other.options
    }

    /// The id of the `k`-th sentinel, counting down from the top of the vocabulary.
    ///
    /// ## Returns
    /// `None` if `k >= extra_ids`.
    pub fn sentinel_id(
        &self,
        k: usize,
    ) -> Option<TokenId> {
        if k >= self.extra_ids() {
            return None;
        }
        TokenId::try_from(self.vocab_size() - 1 - k).ok()
    }

    /// Is `id` a content (byte) id?
    #[inline(always)]
    pub fn is_byte_id(id: TokenId) -> bool {
        (BYTE_ID_OFFSET..BYTE_ID_END).contains(&id)
    }

    /// Drop special and extra ids, and shift back to byte values.
    fn ids_to_bytes(ids: &[TokenId]) -> Vec<u8> {
        ids.iter()
            .copied()
            .filter(|&id| Self::is_byte_id(id))
            .map(|id| (id - BYTE_ID_OFFSET) as u8)
            .collect()
    }
}

impl Vocabulary for ByteVocabulary {
    fn options(&self) -> &VocabularyOptions {
        &self.options
    }

    fn base_vocab_size(&self) -> usize {
        NUM_SPECIAL_TOKENS + BYTE_SIZE
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, s)))]
    fn primitive_encode(
        &self,
        s: &str,
    ) -> Vec<TokenId> {
        s.as_bytes()
            .iter()
            .map(|&b| b as TokenId + BYTE_ID_OFFSET)
            .collect()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    fn primitive_decode(
        &self,
        ids: &[TokenId],
    ) -> String {
        string_from_utf8_ignore(&Self::ids_to_bytes(ids))
    }

    fn primitive_encode_batched(
        &self,
        s: &StringScalar,
    ) -> VocabResult<IdTensor> {
        Ok(ops::add_scalar(&ops::decode_raw_u8(s), BYTE_ID_OFFSET))
    }

    fn primitive_decode_batched(
        &self,
        ids: &IdTensor,
    ) -> VocabResult<StringScalar> {
        host_call("ByteVocabulary::decode", ids, |ids| self.decode(ids)).map(StringScalar::from)
    }
}
