//! CLI entry point for phonotactic word generation

use clap::Parser;
use phonodrift::io::cli::{Cli, SequenceRunner};
use tracing_subscriber::EnvFilter;

fn main() -> phonodrift::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut runner = SequenceRunner::new(cli);
    runner.process()
}
