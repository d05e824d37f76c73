//! # Tensor Value Types

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{TokenId, VocabError, VocabResult, support::strings::string_from_utf8_ignore};

/// A shaped tensor of [`TokenId`] values, stored row-major.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTensor {
    shape: Vec<usize>,
    values: Vec<TokenId>,
}

impl Debug for IdTensor {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("IdTensor")
            .field("shape", &self.shape)
            .field("values", &self.values)
            .finish()
    }
}

impl From<Vec<TokenId>> for IdTensor {
    fn from(values: Vec<TokenId>) -> Self {
        Self::from_vec(values)
    }
}

impl From<&[TokenId]> for IdTensor {
    fn from(values: &[TokenId]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

impl IdTensor {
    /// Build a rank-1 tensor.
    pub fn from_vec(values: Vec<TokenId>) -> Self {
        Self {
            shape: vec![values.len()],
            values,
        }
    }

    /// Build a tensor of arbitrary shape.
    ///
    /// ## Returns
    /// An error if the product of `shape` is not `values.len()`.
    pub fn from_shape_vec(
        shape: Vec<usize>,
        values: Vec<TokenId>,
    ) -> VocabResult<Self> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(VocabError::TensorShape {
                shape,
                len: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// The tensor shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The tensor rank.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Fail unless the tensor has the given rank.
    pub fn expect_rank(
        &self,
        rank: usize,
    ) -> VocabResult<()> {
        if self.rank() != rank {
            return Err(VocabError::TensorRank {
                expected: rank,
                actual: self.rank(),
            });
        }
        Ok(())
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the tensor empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The flat row-major values.
    pub fn as_slice(&self) -> &[TokenId] {
        &self.values
    }

    /// Consume the tensor, returning the flat values.
    pub fn into_vec(self) -> Vec<TokenId> {
        self.values
    }
}

/// A rank-0 string tensor.
///
/// String tensors carry bytes; they are only interpreted as UTF-8
/// when converted to a [`String`].
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringScalar {
    bytes: Vec<u8>,
}

impl Debug for StringScalar {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match core::str::from_utf8(&self.bytes) {
            Ok(s) => f.debug_tuple("StringScalar").field(&s).finish(),
            Err(_) => f.debug_tuple("StringScalar").field(&self.bytes).finish(),
        }
    }
}

impl From<&str> for StringScalar {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

impl From<String> for StringScalar {
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl StringScalar {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The value as `&str`, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Convert to a [`String`], dropping malformed UTF-8.
    pub fn to_string_ignore(&self) -> String {
        string_from_utf8_ignore(&self.bytes)
    }

    /// Consume the scalar, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
