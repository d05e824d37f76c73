use seqvocab::config::{VocabularyConfig, init_vocabulary_config, resolve_vocabulary_path};

/// Args for the resolve-path command.
#[derive(clap::Args, Debug)]
pub struct ResolvePathArgs {
    /// Explicit model path; wins over all configuration.
    #[arg(long, default_value = None)]
    path: Option<String>,

    /// JSON config file; replaces the environment/defaults.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// ``key=value`` config bindings, applied in order (e.g. ``path=./spm.model``).
    #[arg(long = "param")]
    params: Vec<String>,

    /// Print the full vocabulary descriptor as JSON.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    json: bool,
}

impl ResolvePathArgs {
    /// Build the config this invocation describes.
    fn load_config(&self) -> Result<VocabularyConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => VocabularyConfig::from_json_file(path)?,
            None => VocabularyConfig::from_env()?,
        };
        config.apply_bindings(&self.params)?;
        Ok(config)
    }

    /// Run the resolve-path command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config = init_vocabulary_config(self.load_config()?)?;
        let spec = config.vocabulary_spec(self.path.as_deref());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&spec)?);
        } else {
            println!("{}", resolve_vocabulary_path(self.path.as_deref()));
            println!("extra_ids: {}", spec.extra_ids);
        }
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
        args: ResolvePathArgs,
    }

    #[test]
    fn test_load_config_params() {
        let args = TestArgs::parse_from([
            "test",
            "--config",
            "/does/not/exist.json",
        ]);
        assert!(args.args.load_config().is_err());

        let args = TestArgs::parse_from([
            "test",
            "--param",
            "extra_ids=12",
            "--param",
            "path=/b.model",
        ]);
        let config = args.args.load_config().unwrap();
        assert_eq!(config.path, "/b.model");
        assert_eq!(config.extra_ids, 12);
    }
}
