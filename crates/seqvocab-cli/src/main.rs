mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// seqvocab-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    log: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(2)?;

    args.command.run()
}
