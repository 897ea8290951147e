//! CLI entry point for headless sketch runs

use algosketch::io::cli::{Cli, SketchRunner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> algosketch::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    SketchRunner::new(cli).run().map(|_| ())
}
