//! # Tensor Operations
//!
//! Element-wise operations used by the batched codec.
//!
//! First-occurrence search returns an explicit [`Option`]; there is no
//! ``argmax``-style zero default that would be ambiguous with a genuine
//! match at position ``0``.

use crate::{
    TokenId,
    VocabResult,
    tensor::{IdTensor, StringScalar},
    types::id_below,
};

/// Reinterpret the bytes of a string scalar as a rank-1 id tensor.
pub fn decode_raw_u8(s: &StringScalar) -> IdTensor {
    IdTensor::from_vec(s.as_bytes().iter().map(|&b| b as TokenId).collect())
}

/// Add `k` to every element.
///
/// Shape is preserved.
pub fn add_scalar(
    ids: &IdTensor,
    k: TokenId,
) -> IdTensor {
    map_values(ids, |id| id.wrapping_add(k))
}

/// Keep elements below `bound`, replacing the rest with `fill`.
///
/// Shape is preserved.
pub fn where_less(
    ids: &IdTensor,
    bound: usize,
    fill: TokenId,
) -> IdTensor {
    map_values(ids, |id| if id_below(id, bound) { id } else { fill })
}

/// Element-wise ``ids == value``.
pub fn equal(
    ids: &IdTensor,
    value: TokenId,
) -> Vec<bool> {
    ids.as_slice().iter().map(|&id| id == value).collect()
}

/// Find the first position equal to `value` in a rank-1 tensor.
///
/// ## Returns
/// * `Ok(Some(idx))` - the first matching position.
/// * `Ok(None)` - no element matches.
pub fn first_equal(
    ids: &IdTensor,
    value: TokenId,
) -> VocabResult<Option<usize>> {
    ids.expect_rank(1)?;
    Ok(equal(ids, value).iter().position(|&m| m))
}

/// Take ``ids[..end]`` from a rank-1 tensor.
///
/// `end` is clamped to the tensor length.
pub fn slice_prefix(
    ids: &IdTensor,
    end: usize,
) -> VocabResult<IdTensor> {
    ids.expect_rank(1)?;
    let end = end.min(ids.len());
    Ok(IdTensor::from_vec(ids.as_slice()[..end].to_vec()))
}

fn map_values<F>(
    ids: &IdTensor,
    f: F,
) -> IdTensor
where
    F: Fn(TokenId) -> TokenId,
{
    let values = ids.as_slice().iter().map(|&id| f(id)).collect();
    // The shape is unchanged, so the product always matches.
    IdTensor::from_shape_vec(ids.shape().to_vec(), values).unwrap_or_default()
}
