use seqvocab::mixing::{NumExamplesRate, StaticTask, rate_num_examples, rate_unsupervised};

/// Args for the rate command.
#[derive(clap::Args, Debug)]
pub struct RateArgs {
    /// Task name, for log messages.
    #[arg(long, default_value = "task")]
    name: String,

    /// Cached (preprocessed) example count; marks the task as cached.
    #[arg(long, default_value = None)]
    examples: Option<u64>,

    /// Raw input example count.
    #[arg(long, default_value = None)]
    input_examples: Option<u64>,

    /// Cap on the scaled example count.
    #[arg(long, default_value = None)]
    maximum: Option<f64>,

    /// The count is raised to 1/temperature.
    #[arg(long, default_value_t = 1.0)]
    temperature: f64,

    /// Multiplier for the example count.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Do not fall back to the input example count for uncached tasks.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    no_fallback: bool,

    /// Use the fixed unsupervised co-training rate.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    unsupervised: bool,

    /// Override the unsupervised rate.
    #[arg(long, default_value = None, requires = "unsupervised")]
    value: Option<f64>,
}

impl RateArgs {
    fn compute(&self) -> Result<f64, Box<dyn std::error::Error>> {
        let task = StaticTask::new(self.name.clone())
            .with_cached_examples(self.examples)
            .with_input_examples(self.input_examples);

        if self.unsupervised {
            return Ok(rate_unsupervised(&task, self.value));
        }

        let options = NumExamplesRate::default()
            .with_maximum(self.maximum)
            .with_temperature(self.temperature)
            .with_scale(self.scale)
            .with_fallback_to_num_input_examples(!self.no_fallback);

        Ok(rate_num_examples(&task, &options)?)
    }

    /// Run the rate command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{}", self.compute()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        args: RateArgs,
    }

    fn compute(argv: &[&str]) -> Result<f64, Box<dyn std::error::Error>> {
        let mut full = vec!["test"];
        full.extend_from_slice(argv);
        TestArgs::parse_from(full).args.compute()
    }

    #[test]
    fn test_rate() {
        assert_eq!(compute(&["--examples", "100"]).unwrap(), 100.0);
        assert_eq!(
            compute(&["--examples", "100", "--scale", "3", "--maximum", "250"]).unwrap(),
            250.0
        );
        assert_eq!(compute(&["--input-examples", "7"]).unwrap(), 7.0);
        assert!(compute(&["--input-examples", "7", "--no-fallback"]).is_err());
    }

    #[test]
    fn test_unsupervised() {
        assert_eq!(compute(&["--unsupervised"]).unwrap(), 1e6);
        assert_eq!(
            compute(&["--unsupervised", "--value", "2.5", "--examples", "3"]).unwrap(),
            2.5
        );
    }
}
