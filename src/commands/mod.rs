//! Command dispatch layer.
//!
//! Each command lives in its own file and exposes a single `run()` function.

use anyhow::Result;

use crate::cli::Command;

pub mod check;
pub mod generate;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::run(args),
        Command::Generate(args) => generate::run(args),
    }
}
