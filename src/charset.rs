//! Character classes shared by the evaluator and the generator.

/// Uppercase ASCII letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// The only characters that count as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Union of all four classes, used to fill generated passwords.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// One of the four character classes a strong password must draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Symbols belonging to this class.
    pub fn symbols(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL_CHARACTERS.as_bytes(),
        }
    }

    /// Returns `true` if `c` belongs to this class.
    ///
    /// Only ASCII counts: `'É'` is neither uppercase nor lowercase here.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL_CHARACTERS.contains(c),
        }
    }

    /// Returns `true` if any character of `s` belongs to this class.
    pub fn any_in(self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }
}
