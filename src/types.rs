//! Result types returned by the evaluator.

use std::fmt;

/// Coarse classification of a reported level, as shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Moderate => "moderate",
            StrengthTier::Strong => "strong",
        };
        f.write_str(s)
    }
}

/// Outcome of a single evaluation.
///
/// `score` is the reported level (0 to 5), not the raw count of satisfied
/// criteria: four criteria report 5, three report 4, fewer report the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub message: String,
}

impl StrengthResult {
    pub fn new(score: u8, message: impl Into<String>) -> Self {
        Self {
            score,
            message: message.into(),
        }
    }

    pub fn tier(&self) -> StrengthTier {
        match self.score {
            5..=u8::MAX => StrengthTier::Strong,
            3 | 4 => StrengthTier::Moderate,
            _ => StrengthTier::Weak,
        }
    }
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score: {}\n{}", self.score, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StrengthResult::new(0, "").tier(), StrengthTier::Weak);
        assert_eq!(StrengthResult::new(1, "").tier(), StrengthTier::Weak);
        assert_eq!(StrengthResult::new(2, "").tier(), StrengthTier::Weak);
        assert_eq!(StrengthResult::new(4, "").tier(), StrengthTier::Moderate);
        assert_eq!(StrengthResult::new(5, "").tier(), StrengthTier::Strong);
    }

    #[test]
    fn test_display() {
        let result = StrengthResult::new(4, "Moderate password.");
        assert_eq!(result.to_string(), "score: 4\nModerate password.");
        assert_eq!(StrengthTier::Strong.to_string(), "strong");
    }
}
