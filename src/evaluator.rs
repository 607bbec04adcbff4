//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common::is_common_password;
use crate::sections::{
    SectionResult, case_mixing_section, digit_section, length_section,
    special_character_section,
};
use crate::types::StrengthResult;

pub const STRONG_MESSAGE: &str = "Strong password! Your password meets all security criteria.";
pub const MODERATE_MESSAGE: &str =
    "Moderate password. Try adding more complexity for better security.";
pub const WEAK_MESSAGE_PREFIX: &str = "Weak password.";
pub const COMMON_MESSAGE: &str = "Your password is too common! Choose a more unique password.";

/// Delay before an async evaluation runs, so keystrokes can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength.
///
/// Every section runs, in order: length, case mixing, digit, special
/// character. A common password then overrides the outcome with level 1.
/// Otherwise all four passing reports 5, three passing reports 4 and
/// anything less reports the raw count with every failed remark appended.
///
/// Never fails, whatever the input.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("case", case_mixing_section),
        ("digit", digit_section),
        ("special", special_character_section),
    ];

    let mut score = 0u8;
    let mut remarks = Vec::new();

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            None => score += 1,
            Some(remark) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _section_name);
                remarks.push(remark);
            }
        }
    }

    let result = if is_common_password(password.expose_secret()) {
        StrengthResult::new(1, COMMON_MESSAGE)
    } else {
        report(score, &remarks)
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(raw = score, reported = result.score, "password evaluated");

    result
}

fn report(score: u8, remarks: &[String]) -> StrengthResult {
    match score {
        4 => StrengthResult::new(5, STRONG_MESSAGE),
        3 => StrengthResult::new(4, MODERATE_MESSAGE),
        _ => {
            let mut message = String::from(WEAK_MESSAGE_PREFIX);
            for remark in remarks {
                message.push(' ');
                message.push_str(remark);
            }
            StrengthResult::new(score, message)
        }
    }
}

/// Async version that waits out [`DEBOUNCE`] and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before it started");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
