//! Score a password.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use pwd_meter::{evaluate_password_strength, init_common_list_from_path};
use secrecy::SecretString;

use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> Result<()> {
    if let Some(path) = &args.common_list {
        let count = init_common_list_from_path(path)
            .with_context(|| format!("loading common password list {}", path.display()))?;
        tracing::info!(count, "extra common passwords loaded");
    }

    let password = match args.password {
        Some(password) => password,
        None => read_password(io::stdin().lock())?,
    };
    let password = SecretString::new(password.into());

    let evaluation = evaluate_password_strength(&password);
    tracing::debug!(tier = %evaluation.tier(), "check finished");
    println!("{}", evaluation);

    Ok(())
}

/// Reads one line, without its line terminator.
fn read_password<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("reading password from standard input")?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_password_strips_line_ending() {
        assert_eq!(read_password("Abc123!@\n".as_bytes()).unwrap(), "Abc123!@");
        assert_eq!(read_password("Abc123!@\r\nrest".as_bytes()).unwrap(), "Abc123!@");
    }

    #[test]
    fn test_read_password_keeps_inner_whitespace() {
        assert_eq!(read_password(" a b \n".as_bytes()).unwrap(), " a b ");
        assert_eq!(read_password("".as_bytes()).unwrap(), "");
    }
}
