//! # Error Types

/// Errors from seqvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// A tensor had the wrong rank for the operation.
    #[error("expected a rank {expected} tensor, got rank {actual}")]
    TensorRank {
        /// The required rank.
        expected: usize,

        /// The rank that was supplied.
        actual: usize,
    },

    /// A tensor shape does not describe the number of values supplied.
    #[error("tensor shape {shape:?} does not hold {len} values")]
    TensorShape {
        /// The requested shape.
        shape: Vec<usize>,

        /// The number of values supplied.
        len: usize,
    },

    /// Configuration is malformed.
    #[error("invalid config: {0}")]
    Config(String),

    /// The process-wide vocabulary config was initialized twice.
    #[error("vocabulary config is already initialized")]
    ConfigAlreadyInitialized,

    /// A task is missing the example count needed for a mixing rate.
    #[error("task '{task}' has no {kind} example count for split '{split}'")]
    MissingCardinality {
        /// The task name.
        task: String,

        /// The split that was queried.
        split: String,

        /// Which count was required ("cached" or "input").
        kind: &'static str,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for seqvocab operations.
pub type VocabResult<T> = core::result::Result<T, VocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VocabError::TensorRank {
            expected: 1,
            actual: 2,
        };
        assert_eq!(err.to_string(), "expected a rank 1 tensor, got rank 2");

        let err = VocabError::MissingCardinality {
            task: "wiki".to_string(),
            split: "train".to_string(),
            kind: "cached",
        };
        assert_eq!(
            err.to_string(),
            "task 'wiki' has no cached example count for split 'train'"
        );
    }
}
