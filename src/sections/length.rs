//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Minimum number of characters (not bytes) a password needs.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(remark)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Make your password at least {} characters long.",
            MIN_LENGTH
        ));
    }
    None
}
