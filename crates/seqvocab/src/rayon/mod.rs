//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch-parallel vocabularies.

mod rayon_codec;

pub use rayon_codec::ParallelRayonCodec;
