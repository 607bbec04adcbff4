//! Password evaluation sections
//!
//! Each section checks one structural criterion.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{case_mixing_section, digit_section, special_character_section};

/// Result type for section evaluation functions.
/// - `Some(remark)` - Section failed, with advice for the user
/// - `None` - Section passed
pub type SectionResult = Option<String>;
