//! # Vocabulary Trait

use crate::{
    TokenId,
    VocabResult,
    tensor::{IdTensor, StringScalar, ops},
    types::{EOS_ID, PAD_ID, UNK_ID, id_below},
    vocab::VocabularyOptions,
};

/// Replace every id at or above `base_vocab_size` with `unk_id`.
///
/// Extra (sentinel) ids sit above the base vocabulary, so they are
/// replaced as well.
pub fn replace_out_of_range(
    ids: &mut [TokenId],
    base_vocab_size: usize,
    unk_id: TokenId,
) {
    for id in ids.iter_mut() {
        if !id_below(*id, base_vocab_size) {
            *id = unk_id;
        }
    }
}

/// Truncate `ids` strictly before the first `eos_id`.
///
/// The terminator and everything after it are dropped;
/// a sequence without a terminator is left unchanged.
pub fn truncate_at_terminator(
    ids: &mut Vec<TokenId>,
    eos_id: TokenId,
) {
    if let Some(idx) = ids.iter().position(|&id| id == eos_id) {
        ids.truncate(idx);
    }
}

/// Common contract for all vocabularies.
///
/// Implementors supply the id-space size and two codec pairs:
/// * [`primitive_encode`](Self::primitive_encode) /
///   [`primitive_decode`](Self::primitive_decode) - scalar codec.
/// * [`primitive_encode_batched`](Self::primitive_encode_batched) /
///   [`primitive_decode_batched`](Self::primitive_decode_batched) - tensor codec.
///
/// Implementors are responsible for reserving [`PAD_ID`], and [`EOS_ID`] /
/// [`UNK_ID`] when `use_eos` / `use_unk` are set. `base_vocab_size` counts
/// those specials but not the extra ids.
///
/// The primitive decoders receive ids that have already been cleaned:
/// out-of-range ids replaced by UNK, and truncated at the first EOS.
pub trait Vocabulary: Send + Sync {
    /// The construction options.
    fn options(&self) -> &VocabularyOptions;

    /// Vocabulary size, excluding extra ids but including PAD/EOS/UNK.
    fn base_vocab_size(&self) -> usize;

    /// Encode a string to ids; no EOS is added.
    fn primitive_encode(
        &self,
        s: &str,
    ) -> Vec<TokenId>;

    /// Decode cleaned ids to a string.
    fn primitive_decode(
        &self,
        ids: &[TokenId],
    ) -> String;

    /// Encode a string scalar to a rank-1 id tensor; no EOS is added.
    fn primitive_encode_batched(
        &self,
        s: &StringScalar,
    ) -> VocabResult<IdTensor>;

    /// Decode a cleaned rank-1 id tensor to a string scalar.
    fn primitive_decode_batched(
        &self,
        ids: &IdTensor,
    ) -> VocabResult<StringScalar>;

    /// The padding id.
    fn pad_id(&self) -> TokenId {
        PAD_ID
    }

    /// The EOS id, if `use_eos`.
    fn eos_id(&self) -> Option<TokenId> {
        self.options().use_eos.then_some(EOS_ID)
    }

    /// The UNK id, if `use_unk`.
    fn unk_id(&self) -> Option<TokenId> {
        self.options().use_unk.then_some(UNK_ID)
    }

    /// The number of extra ids.
    fn extra_ids(&self) -> usize {
        self.options().extra_ids
    }

    /// Vocabulary size, including extra ids.
    fn vocab_size(&self) -> usize {
        self.base_vocab_size() + self.extra_ids()
    }

    /// Encode a string to ids, without adding EOS.
    fn encode(
        &self,
        s: &str,
    ) -> Vec<TokenId> {
        self.primitive_encode(s)
    }

    /// Decode ids to a string, up to the first EOS.
    ///
    /// Any `i32` is accepted; nothing here fails.
    fn decode(
        &self,
        ids: &[TokenId],
    ) -> String {
        let mut clean_ids = ids.to_vec();

        if let Some(unk_id) = self.unk_id() {
            replace_out_of_range(&mut clean_ids, self.base_vocab_size(), unk_id);
        }

        if let Some(eos_id) = self.eos_id() {
            truncate_at_terminator(&mut clean_ids, eos_id);
        }

        self.primitive_decode(&clean_ids)
    }

    /// Encode a string scalar to a rank-1 id tensor, without adding EOS.
    fn encode_tensor(
        &self,
        s: &StringScalar,
    ) -> VocabResult<IdTensor> {
        self.primitive_encode_batched(s)
    }

    /// Decode a rank-1 id tensor to a string scalar, up to the first EOS.
    ///
    /// A row with no EOS is passed through unchanged, whatever its
    /// first element is.
    ///
    /// ## Returns
    /// A rank error if `ids` is not rank 1.
    fn decode_tensor(
        &self,
        ids: &IdTensor,
    ) -> VocabResult<StringScalar> {
        ids.expect_rank(1)?;

        let mut valid_ids = ids.clone();

        if let Some(unk_id) = self.unk_id() {
            valid_ids = ops::where_less(&valid_ids, self.base_vocab_size(), unk_id);
        }

        if let Some(eos_id) = self.eos_id()
            && let Some(first_eos) = ops::first_equal(&valid_ids, eos_id)?
        {
            valid_ids = ops::slice_prefix(&valid_ids, first_eos)?;
        }

        self.primitive_decode_batched(&valid_ids)
    }

    /// Encode a batch of strings.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<TokenId>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }

    /// Decode a batch of id rows.
    fn decode_batch(
        &self,
        batch: &[Vec<TokenId>],
    ) -> Vec<String> {
        batch.iter().map(|ids| self.decode(ids)).collect()
    }

    /// Decode a batch of rank-1 id tensors.
    fn decode_tensor_batch(
        &self,
        batch: &[IdTensor],
    ) -> VocabResult<Vec<StringScalar>> {
        batch.iter().map(|ids| self.decode_tensor(ids)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders ids literally, so the cleanup steps are visible.
    struct EchoVocab {
        options: VocabularyOptions,
    }

    impl Vocabulary for EchoVocab {
        fn options(&self) -> &VocabularyOptions {
            &self.options
        }

        fn base_vocab_size(&self) -> usize {
            10
        }

        fn primitive_encode(
            &self,
            s: &str,
        ) -> Vec<TokenId> {
            s.split(',').filter_map(|t| t.parse().ok()).collect()
        }

        fn primitive_decode(
            &self,
            ids: &[TokenId],
        ) -> String {
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        }

        fn primitive_encode_batched(
            &self,
            s: &StringScalar,
        ) -> VocabResult<IdTensor> {
            Ok(self.primitive_encode(&s.to_string_ignore()).into())
        }

        fn primitive_decode_batched(
            &self,
            ids: &IdTensor,
        ) -> VocabResult<StringScalar> {
            Ok(self.primitive_decode(ids.as_slice()).into())
        }
    }

    fn echo(options: VocabularyOptions) -> EchoVocab {
        EchoVocab { options }
    }

    #[test]
    fn test_id_layout() {
        let vocab = echo(VocabularyOptions::default().with_extra_ids(5));
        assert_eq!(vocab.pad_id(), 0);
        assert_eq!(vocab.eos_id(), Some(1));
        assert_eq!(vocab.unk_id(), Some(2));
        assert_eq!(vocab.extra_ids(), 5);
        assert_eq!(vocab.vocab_size(), 15);

        let vocab = echo(
            VocabularyOptions::default()
                .with_use_eos(false)
                .with_use_unk(false),
        );
        assert_eq!(vocab.pad_id(), 0);
        assert_eq!(vocab.eos_id(), None);
        assert_eq!(vocab.unk_id(), None);
        assert_eq!(vocab.vocab_size(), 10);
    }

    #[test]
    fn test_encode_adds_no_eos() {
        let vocab = echo(VocabularyOptions::default());
        assert_eq!(vocab.encode("4,5"), vec![4, 5]);
        assert_eq!(vocab.encode(""), Vec::<TokenId>::new());
    }

    #[test]
    fn test_decode_cleanup() {
        let vocab = echo(VocabularyOptions::default().with_extra_ids(5));

        // Out of range, including extra ids, becomes UNK.
        assert_eq!(vocab.decode(&[3, 10, 12, 99, -1]), "3,2,2,2,-1");

        // Truncated before the first EOS.
        assert_eq!(vocab.decode(&[3, 4, 1, 5, 1, 6]), "3,4");
        assert_eq!(vocab.decode(&[1, 3]), "");

        // UNK replacement happens first; it never produces an EOS.
        assert_eq!(vocab.decode(&[3, 20, 1]), "3,2");

        assert_eq!(vocab.decode(&[]), "");
    }

    #[test]
    fn test_decode_cleanup_disabled() {
        let vocab = echo(
            VocabularyOptions::default()
                .with_use_eos(false)
                .with_use_unk(false),
        );
        assert_eq!(vocab.decode(&[3, 1, 12]), "3,1,12");
    }

    #[test]
    fn test_decode_tensor_matches_decode() {
        let vocab = echo(VocabularyOptions::default());

        let rows: Vec<Vec<TokenId>> = vec![
            vec![],
            vec![1],
            vec![3, 4, 1, 5],
            vec![5, 6, 7],
            vec![0, 4],
            vec![11, 3, 1],
        ];
        for row in rows {
            let scalar = vocab.decode(&row);
            let batched = vocab.decode_tensor(&row.clone().into()).unwrap();
            assert_eq!(batched.as_str(), Some(scalar.as_str()), "row: {row:?}");
        }
    }

    #[test]
    fn test_decode_tensor_without_terminator() {
        let vocab = echo(VocabularyOptions::default());

        // Element 0 is not EOS, and there is no EOS anywhere: unchanged.
        let ids: IdTensor = vec![5, 6, 7].into();
        assert_eq!(vocab.decode_tensor(&ids).unwrap().as_str(), Some("5,6,7"));

        // A genuine EOS at position 0 truncates everything.
        let ids: IdTensor = vec![1, 6, 7].into();
        assert_eq!(vocab.decode_tensor(&ids).unwrap().as_str(), Some(""));
    }

    #[test]
    fn test_decode_tensor_rank() {
        let vocab = echo(VocabularyOptions::default());
        let ids = IdTensor::from_shape_vec(vec![1, 2], vec![3, 4]).unwrap();
        assert!(vocab.decode_tensor(&ids).is_err());
    }

    #[test]
    fn test_batches() {
        let vocab = echo(VocabularyOptions::default());
        let batch = vocab.encode_batch(&["3,4", "5,1,6"]);
        assert_eq!(batch, vec![vec![3, 4], vec![5, 1, 6]]);
        assert_eq!(vocab.decode_batch(&batch), vec!["3,4", "5"]);

        let tensors: Vec<IdTensor> = batch.into_iter().map(IdTensor::from).collect();
        let decoded = vocab.decode_tensor_batch(&tensors).unwrap();
        assert_eq!(decoded, vec![StringScalar::from("3,4"), StringScalar::from("5")]);
    }
}
