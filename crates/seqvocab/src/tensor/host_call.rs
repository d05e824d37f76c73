//! # Host Call Boundary
//!
//! Some batched operations have no tensor-native form (byte-level UTF-8
//! repair, for one). [`host_call`] hands a rank-1 id tensor to a plain
//! synchronous function and returns its result to the batched caller.
//!
//! The call is synchronous. Callers must not assume it runs on the same
//! thread, or in the same execution context, as the surrounding batched
//! pipeline.

use crate::{TokenId, VocabResult, tensor::IdTensor};

/// Cross from the batched context into a synchronous host function.
///
/// ## Arguments
/// * `name` - a label for the call, used in logs.
/// * `ids` - a rank-1 tensor; passed to `func` as a flat slice.
/// * `func` - the host function.
///
/// ## Returns
/// The result of `func`, or a rank error if `ids` is not rank 1.
pub fn host_call<F, R>(
    name: &str,
    ids: &IdTensor,
    func: F,
) -> VocabResult<R>
where
    F: FnOnce(&[TokenId]) -> R,
{
    ids.expect_rank(1)?;
    log::trace!("host_call {name}: {} ids", ids.len());
    Ok(func(ids.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_call() {
        let ids = IdTensor::from_vec(vec![1, 2, 3]);
        let total = host_call("sum", &ids, |ids| ids.iter().sum::<TokenId>()).unwrap();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_host_call_rank() {
        let ids = IdTensor::from_shape_vec(vec![3, 1], vec![1, 2, 3]).unwrap();
        assert!(host_call("sum", &ids, |ids| ids.len()).is_err());
    }
}
