//! # Common Types and Constants

/// The id type of the codec ABI.
///
/// Ids are signed 32-bit integers; decode accepts any value,
/// including negative ones, and filters what it cannot represent.
pub type TokenId = i32;

/// Padding id; reserved by every vocabulary.
pub const PAD_ID: TokenId = 0;

/// End-of-sequence id; reserved when `use_eos` is set.
pub const EOS_ID: TokenId = 1;

/// Unknown id; reserved when `use_unk` is set.
pub const UNK_ID: TokenId = 2;

/// Is `id` below `bound`?
///
/// Negative ids are always below any bound.
#[inline(always)]
pub fn id_below(
    id: TokenId,
    bound: usize,
) -> bool {
    usize::try_from(id).map_or(true, |id| id < bound)
}

/// Compile-time check that a value is [`Send`].
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is [`Sync`].
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_ids() {
        assert_eq!(PAD_ID, 0);
        assert_eq!(EOS_ID, 1);
        assert_eq!(UNK_ID, 2);
    }

    #[test]
    fn test_id_below() {
        assert!(id_below(0, 259));
        assert!(id_below(258, 259));
        assert!(!id_below(259, 259));
        assert!(!id_below(TokenId::MAX, 259));
        assert!(id_below(-1, 259));
        assert!(id_below(TokenId::MIN, 0));
    }
}
