//! Generate a strong password.

use anyhow::Result;
use pwd_meter::generate_password;
use secrecy::ExposeSecret;

use crate::cli::GenerateArgs;

pub fn run(args: GenerateArgs) -> Result<()> {
    let password = generate_password(requested_length(args.length));
    println!("{}", password.expose_secret());
    Ok(())
}

/// Negative lengths mean "as short as allowed"; the generator clamps from there.
fn requested_length(length: i64) -> usize {
    usize::try_from(length).unwrap_or(0)
}
