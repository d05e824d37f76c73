//! # Mixture Task

use serde::{Deserialize, Serialize};

/// The view of a task a mixing-rate function needs.
pub trait MixtureTask {
    /// The task name.
    fn name(&self) -> &str;

    /// Has the task been preprocessed and cached?
    fn is_cached(&self) -> bool;

    /// The number of preprocessed (cached) examples in `split`, if known.
    fn cached_num_examples(
        &self,
        split: &str,
    ) -> Option<u64>;

    /// The number of raw input examples in `split`, if known.
    fn num_input_examples(
        &self,
        split: &str,
    ) -> Option<u64>;
}

/// A [`MixtureTask`] with fixed, split-independent counts.
///
/// The task counts as cached when `cached_examples` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTask {
    /// The task name.
    pub name: String,

    /// Preprocessed example count.
    pub cached_examples: Option<u64>,

    /// Raw input example count.
    pub input_examples: Option<u64>,
}

impl StaticTask {
    /// Create a task with no known counts.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the cached example count.
    pub fn with_cached_examples(
        mut self,
        count: Option<u64>,
    ) -> Self {
        self.cached_examples = count;
        self
    }

    /// Set the input example count.
    pub fn with_input_examples(
        mut self,
        count: Option<u64>,
    ) -> Self {
        self.input_examples = count;
        self
    }
}

impl MixtureTask for StaticTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_cached(&self) -> bool {
        self.cached_examples.is_some()
    }

    fn cached_num_examples(
        &self,
        _split: &str,
    ) -> Option<u64> {
        self.cached_examples
    }

    fn num_input_examples(
        &self,
        _split: &str,
    ) -> Option<u64> {
        self.input_examples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_task() {
        let task = StaticTask::new("c4");
        assert_eq!(task.name(), "c4");
        assert!(!task.is_cached());
        assert_eq!(task.cached_num_examples("train"), None);

        let task = task
            .with_cached_examples(Some(10))
            .with_input_examples(Some(12));
        assert!(task.is_cached());
        assert_eq!(task.cached_num_examples("train"), Some(10));
        assert_eq!(task.num_input_examples("validation"), Some(12));
    }
}
