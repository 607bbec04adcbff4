//! Common password list
//!
//! Holds the built-in list of known-weak passwords and an optional extra list
//! loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Passwords rejected regardless of their structure (compared lowercased).
pub const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "password123"];

static EXTRA_COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password list is empty")]
    EmptyFile,
}

/// Loads an extra list of common passwords, one per line.
///
/// Lines are trimmed and lowercased; blank lines are skipped. The list is
/// loaded once per process: later calls return the size of the list already
/// in place without touching `path`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no non-blank line
///
/// # Example
///
/// ```rust,no_run
/// let count = pwd_meter::init_common_list_from_path("/etc/pwd-meter/common.txt")?;
/// println!("{count} extra common passwords loaded");
/// # Ok::<(), pwd_meter::CommonListError>(())
/// ```
pub fn init_common_list_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CommonListError> {
    {
        let guard = EXTRA_COMMON_PASSWORDS
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common list initialization FAILED: file not found {:?}", path);
        return Err(CommonListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common list initialization FAILED: empty file {:?}", path);
        return Err(CommonListError::EmptyFile);
    }

    let count = set.len();
    {
        let mut guard = EXTRA_COMMON_PASSWORDS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race while the file was read.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Common list initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the extra list, or `None` if none was loaded.
pub fn extra_common_passwords() -> Option<HashSet<String>> {
    EXTRA_COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Checks whether a password is a known common password (case-insensitive).
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return true;
    }
    EXTRA_COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|extra| extra.contains(&lowered))
}

/// Drops the extra list for testing purposes.
#[cfg(test)]
pub(crate) fn reset_common_list_for_testing() {
    let mut guard = EXTRA_COMMON_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
