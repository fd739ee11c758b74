use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod error;
mod extract;
mod output;
mod report;
mod runner;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("nessex=debug")
    } else {
        EnvFilter::new("nessex=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    cli::run::execute(cli)
}
