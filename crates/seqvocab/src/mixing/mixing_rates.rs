//! # Mixing Rate Functions

use serde::{Deserialize, Serialize};

use crate::{VocabError, VocabResult, mixing::MixtureTask};

/// The split example counts are read from.
pub const TRAIN_SPLIT: &str = "train";

/// The default weight of [`rate_unsupervised`].
pub const DEFAULT_UNSUPERVISED_RATE: f64 = 1e6;

/// Options for [`rate_num_examples`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumExamplesRate {
    /// Cap on the (scaled) example count.
    pub maximum: Option<f64>,

    /// The count is raised to ``1 / temperature``.
    pub temperature: f64,

    /// Multiplier applied to the count.
    pub scale: f64,

    /// Use the input example count when the task is not cached.
    pub fallback_to_num_input_examples: bool,
}

impl Default for NumExamplesRate {
    fn default() -> Self {
        Self {
            maximum: None,
            temperature: 1.0,
            scale: 1.0,
            fallback_to_num_input_examples: true,
        }
    }
}

impl NumExamplesRate {
    /// Set the maximum.
    pub fn with_maximum(
        mut self,
        maximum: Option<f64>,
    ) -> Self {
        self.maximum = maximum;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(
        mut self,
        temperature: f64,
    ) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the scale.
    pub fn with_scale(
        mut self,
        scale: f64,
    ) -> Self {
        self.scale = scale;
        self
    }

    /// Set the input-example fallback.
    pub fn with_fallback_to_num_input_examples(
        mut self,
        fallback: bool,
    ) -> Self {
        self.fallback_to_num_input_examples = fallback;
        self
    }
}

/// Compute a mixing rate from a task's example count in `split`.
///
/// The count is the cached example count when the task is cached, or when
/// the fallback is disabled; otherwise the input example count. Then:
/// 1. ``count *= scale``
/// 2. ``count = min(count, maximum)``, if `maximum` is set;
/// 3. ``count = count ^ (1 / temperature)``, if `temperature != 1`.
///
/// ## Returns
/// [`VocabError::MissingCardinality`] if the required count is unknown.
pub fn mixing_rate_num_examples<T>(
    task: &T,
    options: &NumExamplesRate,
    split: &str,
) -> VocabResult<f64>
where
    T: MixtureTask + ?Sized,
{
    let missing = |kind| VocabError::MissingCardinality {
        task: task.name().to_string(),
        split: split.to_string(),
        kind,
    };

    let count = if task.is_cached() || !options.fallback_to_num_input_examples {
        task.cached_num_examples(split).ok_or_else(|| missing("cached"))?
    } else {
        log::warn!(
            "task '{}' not cached so using number of input examples instead of preprocessed examples to compute rate",
            task.name()
        );
        task.num_input_examples(split)
            .ok_or_else(|| missing("input"))?
    };

    let mut rate = count as f64 * options.scale;
    if let Some(maximum) = options.maximum {
        rate = rate.min(maximum);
    }
    if options.temperature != 1.0 {
        rate = rate.powf(1.0 / options.temperature);
    }
    Ok(rate)
}

/// Mixing rate equal to the number of training examples for the task.
pub fn rate_num_examples<T>(
    task: &T,
    options: &NumExamplesRate,
) -> VocabResult<f64>
where
    T: MixtureTask + ?Sized,
{
    mixing_rate_num_examples(task, options, TRAIN_SPLIT)
}

/// Fixed mixing rate for an unsupervised co-training task.
///
/// `task` is ignored; returns `value`, or [`DEFAULT_UNSUPERVISED_RATE`].
pub fn rate_unsupervised<T: ?Sized>(
    _task: &T,
    value: Option<f64>,
) -> f64 {
    value.unwrap_or(DEFAULT_UNSUPERVISED_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::StaticTask;

    fn cached(count: u64) -> StaticTask {
        StaticTask::new("cached").with_cached_examples(Some(count))
    }

    #[test]
    fn test_rate_num_examples_cached() {
        let task = cached(1000);
        assert_eq!(
            rate_num_examples(&task, &NumExamplesRate::default()).unwrap(),
            1000.0
        );

        let options = NumExamplesRate::default().with_scale(2.0);
        assert_eq!(rate_num_examples(&task, &options).unwrap(), 2000.0);

        // Scale applies before the maximum.
        let options = options.with_maximum(Some(1500.0));
        assert_eq!(rate_num_examples(&task, &options).unwrap(), 1500.0);

        let options = NumExamplesRate::default().with_temperature(2.0);
        let rate = rate_num_examples(&cached(10_000), &options).unwrap();
        assert!((rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_num_examples_fallback() {
        let task = StaticTask::new("raw").with_input_examples(Some(42));
        assert_eq!(
            rate_num_examples(&task, &NumExamplesRate::default()).unwrap(),
            42.0
        );

        let strict = NumExamplesRate::default().with_fallback_to_num_input_examples(false);
        assert!(matches!(
            rate_num_examples(&task, &strict),
            Err(VocabError::MissingCardinality { kind: "cached", .. })
        ));

        // Cached tasks never use the input count.
        let task = cached(5).with_input_examples(Some(42));
        assert_eq!(
            rate_num_examples(&task, &NumExamplesRate::default()).unwrap(),
            5.0
        );

        let task = StaticTask::new("empty");
        assert!(matches!(
            rate_num_examples(&task, &NumExamplesRate::default()),
            Err(VocabError::MissingCardinality { kind: "input", .. })
        ));
    }

    #[test]
    fn test_rate_unsupervised() {
        assert_eq!(rate_unsupervised(&cached(3), None), 1e6);
        assert_eq!(rate_unsupervised(&StaticTask::new("x"), None), 1e6);
        assert_eq!(rate_unsupervised("anything", None), 1e6);
        assert_eq!(rate_unsupervised(&(), Some(0.5)), 0.5);
    }

    #[test]
    fn test_options_serde() {
        let options: NumExamplesRate = serde_json::from_str(r#"{"maximum": 5.0}"#).unwrap();
        assert_eq!(options, NumExamplesRate::default().with_maximum(Some(5.0)));
    }
}
