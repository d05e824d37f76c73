use crate::commands::{cat::CatArgs, rate::RateArgs, resolve_path::ResolvePathArgs};

pub mod cat;
pub mod rate;
pub mod resolve_path;

/// Subcommands for seqvocab-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming byte-vocabulary codec.
    Cat(CatArgs),

    /// Print the resolved default subword vocabulary.
    ResolvePath(ResolvePathArgs),

    /// Compute a mixing rate.
    Rate(RateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::ResolvePath(cmd) => cmd.run(),
            Commands::Rate(cmd) => cmd.run(),
        }
    }
}
