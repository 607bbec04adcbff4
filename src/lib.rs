//! Password strength meter library
//!
//! This library scores passwords against four structural rules (length,
//! mixed case, digits, special characters) plus a common-password denylist,
//! and generates random passwords that always pass those rules.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-meter` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc12345".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.score, 4);
//! assert_eq!(evaluation.tier(), StrengthTier::Moderate);
//!
//! let generated = generate_password(16);
//! assert_eq!(evaluate_password_strength(&generated).score, 5);
//! ```

// Internal modules
mod charset;
mod common;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use charset::{ALPHABET, CharClass, DIGITS, LOWERCASE, SPECIAL_CHARACTERS, UPPERCASE};
pub use common::{
    COMMON_PASSWORDS, CommonListError, extra_common_passwords, init_common_list_from_path,
    is_common_password,
};
pub use evaluator::{
    COMMON_MESSAGE, MODERATE_MESSAGE, STRONG_MESSAGE, WEAK_MESSAGE_PREFIX,
    evaluate_password_strength,
};
pub use generator::{
    DEFAULT_GENERATED_LENGTH, MIN_GENERATED_LENGTH, generate_password, generate_password_with_rng,
};
pub use types::{StrengthResult, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
