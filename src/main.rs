//! readlint - prose readability linting CLI
//!
//! A fast, local-first prose checker that flags sentences several
//! readability formulas agree are too hard for the target reader age.

use anyhow::Result;
use clap::Parser;
use readlint::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level. Logs go to
    // stderr so stdout stays clean for reports.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    cli::run(cli)
}
