//! Character variety sections - mixed case, digits, special characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::{CharClass, SPECIAL_CHARACTERS};

/// Checks that the password mixes uppercase and lowercase letters.
pub fn case_mixing_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if CharClass::Uppercase.any_in(pwd) && CharClass::Lowercase.any_in(pwd) {
        return None;
    }
    Some("Include both uppercase and lowercase letters.".to_string())
}

/// Checks that the password contains a digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if CharClass::Digit.any_in(password.expose_secret()) {
        return None;
    }
    Some("Add at least one number (0-9).".to_string())
}

/// Checks that the password contains one of the allowed special characters.
pub fn special_character_section(password: &SecretString) -> SectionResult {
    if CharClass::Special.any_in(password.expose_secret()) {
        return None;
    }
    Some(format!(
        "Include at least one special character ({}).",
        SPECIAL_CHARACTERS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_case_mixing_missing_uppercase() {
        assert_eq!(
            case_mixing_section(&secret("lowercase123!")),
            Some("Include both uppercase and lowercase letters.".to_string())
        );
    }

    #[test]
    fn test_case_mixing_missing_lowercase() {
        assert!(case_mixing_section(&secret("UPPERCASE123!")).is_some());
    }

    #[test]
    fn test_case_mixing_ignores_non_ascii_letters() {
        assert!(case_mixing_section(&secret("Ébc")).is_some());
        assert_eq!(case_mixing_section(&secret("Ab")), None);
    }

    #[test]
    fn test_digit_section() {
        assert_eq!(
            digit_section(&secret("NoNumbers!")),
            Some("Add at least one number (0-9).".to_string())
        );
        assert_eq!(digit_section(&secret("one1")), None);
    }

    #[test]
    fn test_special_section_missing() {
        assert_eq!(
            special_character_section(&secret("NoSpecial123")),
            Some("Include at least one special character (!@#$%^&*).".to_string())
        );
    }

    #[test]
    fn test_special_section_rejects_other_punctuation() {
        assert!(special_character_section(&secret("Dash-Under_Score.")).is_some());
    }

    #[test]
    fn test_special_section_each_allowed_character() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert_eq!(special_character_section(&secret(&format!("ab{c}"))), None);
        }
    }
}
