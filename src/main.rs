//! pwd-meter - check password strength or generate a strong password.
//!
//! # Usage
//!
//! ```bash
//! pwd-meter check 'Abc123!@'
//! echo 'Abc123!@' | pwd-meter check
//! pwd-meter generate --length 16
//! ```

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(&cli.log_level)?;
    commands::dispatch(cli.command)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();

    Ok(())
}
