//! Vocabulary Options
//!
//! Construction-time options shared by every [`Vocabulary`](super::Vocabulary).

use serde::{Deserialize, Serialize};

/// Options fixed at vocabulary construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyOptions {
    /// The number of extra (sentinel) ids reserved above the base vocabulary.
    pub extra_ids: usize,

    /// Should decoding stop at the first EOS id?
    pub use_eos: bool,

    /// Should ids outside the base vocabulary decode as UNK?
    pub use_unk: bool,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            extra_ids: 0,
            use_eos: true,
            use_unk: true,
        }
    }
}

impl VocabularyOptions {
    /// Sets the extra id count.
    pub fn with_extra_ids(
        mut self,
        extra_ids: usize,
    ) -> Self {
        self.extra_ids = extra_ids;
        self
    }

    /// Sets whether decoding stops at EOS.
    pub fn with_use_eos(
        mut self,
        use_eos: bool,
    ) -> Self {
        self.use_eos = use_eos;
        self
    }

    /// Sets whether out-of-range ids decode as UNK.
    pub fn with_use_unk(
        mut self,
        use_unk: bool,
    ) -> Self {
        self.use_unk = use_unk;
        self
    }
}
