//! Command-line interface definitions.
//!
//! Describes how users drive the meter from a terminal; no logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pwd_meter::DEFAULT_GENERATED_LENGTH;

#[derive(Parser, Debug)]
#[command(name = "pwd-meter")]
#[command(version, about = "Check password strength or generate a strong password", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a password from 0 to 5 and explain the result
    ///
    /// The exit code is 0 whatever the score.
    Check(CheckArgs),

    /// Print a random password that scores 5
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Password to check; read from standard input when omitted
    pub password: Option<String>,

    /// Extra newline-separated list of passwords to reject as common
    #[arg(long, env = "PWD_METER_COMMON_LIST")]
    pub common_list: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Length of the generated password (values below 8 become 8)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GENERATED_LENGTH as i64, allow_negative_numbers = true)]
    pub length: i64,
}
