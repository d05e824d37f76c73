//! # Batched Tensor Representation
//!
//! The batched codec operates on the value types a tensor runtime hands
//! across its boundary:
//! * [`StringScalar`] - a rank-0 string tensor; raw bytes, not necessarily UTF-8.
//! * [`IdTensor`] - a shaped ``i32`` tensor; the codec requires rank 1.
//!
//! [`ops`] provides the element-wise operations the batched decode is
//! written in terms of, and [`host_call`] is the explicit crossing from
//! the batched context into a synchronous scalar implementation.

pub mod host_call;
pub mod ops;
pub mod tensor_types;

#[doc(inline)]
pub use host_call::host_call;
#[doc(inline)]
pub use tensor_types::{IdTensor, StringScalar};
