//! # Parallel Codec

use crate::{
    TokenId,
    VocabResult,
    tensor::{IdTensor, StringScalar},
    vocab::{Vocabulary, VocabularyOptions},
};

/// Batch-Level Parallel Vocabulary Wrapper.
///
/// Enables ``rayon`` encoding and decoding of batches; single-row
/// calls are forwarded to the wrapped vocabulary unchanged.
///
/// Rows are independent, so each row of a batch decodes exactly as
/// the inner vocabulary decodes it alone.
#[derive(Clone, Debug)]
pub struct ParallelRayonCodec<V: Vocabulary> {
    /// Wrapped vocabulary.
    pub inner: V,
}

impl<V: Vocabulary> ParallelRayonCodec<V> {
    /// Create a new parallel codec.
    ///
    /// ## Arguments
    /// * `inner` - The vocabulary to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonCodec` instance.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Vocabulary> Vocabulary for ParallelRayonCodec<V> {
    fn options(&self) -> &VocabularyOptions {
        self.inner.options()
    }

    fn base_vocab_size(&self) -> usize {
        self.inner.base_vocab_size()
    }

    fn primitive_encode(
        &self,
        s: &str,
    ) -> Vec<TokenId> {
        self.inner.primitive_encode(s)
    }

    fn primitive_decode(
        &self,
        ids: &[TokenId],
    ) -> String {
        self.inner.primitive_decode(ids)
    }

    fn primitive_encode_batched(
        &self,
        s: &StringScalar,
    ) -> VocabResult<IdTensor> {
        self.inner.primitive_encode_batched(s)
    }

    fn primitive_decode_batched(
        &self,
        ids: &IdTensor,
    ) -> VocabResult<StringScalar> {
        self.inner.primitive_decode_batched(ids)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<TokenId>> {
        use rayon::prelude::*;

        batch.par_iter().map(|s| self.inner.encode(s)).collect()
    }

    fn decode_batch(
        &self,
        batch: &[Vec<TokenId>],
    ) -> Vec<String> {
        use rayon::prelude::*;

        batch.par_iter().map(|ids| self.inner.decode(ids)).collect()
    }

    fn decode_tensor_batch(
        &self,
        batch: &[IdTensor],
    ) -> VocabResult<Vec<StringScalar>> {
        use rayon::prelude::*;

        log::debug!("parallel decode of {} rows", batch.len());
        batch
            .par_iter()
            .map(|ids| self.inner.decode_tensor(ids))
            .collect()
    }
}
