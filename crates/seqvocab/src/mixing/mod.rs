//! # Mixing Rates
//!
//! Policy functions that weight a task within a training mixture.
//!
//! * [`rate_num_examples`] - weight by the task's example count.
//! * [`rate_unsupervised`] - a fixed weight for a co-training task.

pub mod mixing_rates;
pub mod mixture_task;

#[doc(inline)]
pub use mixing_rates::{
    DEFAULT_UNSUPERVISED_RATE,
    NumExamplesRate,
    TRAIN_SPLIT,
    mixing_rate_num_examples,
    rate_num_examples,
    rate_unsupervised,
};
#[doc(inline)]
pub use mixture_task::{MixtureTask, StaticTask};
