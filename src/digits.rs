//! Digit strings and guess validation.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::config::MatchPolicy;

/// Reason a guess was refused before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display("Please enter exactly {expected} digits.")]
    WrongLength { expected: usize, actual: usize },

    #[display("Please enter only numbers.")]
    NonDigitCharacter,

    #[display("Your guess cannot contain repeated digits.")]
    RepeatedDigitNotAllowed,
}

impl std::error::Error for ValidationError {}

/// An ordered sequence of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitString(Vec<u8>);

impl DigitString {
    /// Validates player input against the session's length and repeat rules.
    ///
    /// Surrounding whitespace is ignored. Checks run in order: length,
    /// non-digit characters, repeated digits.
    pub fn parse(text: &str, digit_count: usize, policy: MatchPolicy) -> Result<Self, ValidationError> {
        let text = text.trim();
        let actual = text.chars().count();

        if actual != digit_count {
            return Err(ValidationError::WrongLength {
                expected: digit_count,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonDigitCharacter);
        }

        let digits: Vec<u8> = text.bytes().map(|b| b - b'0').collect();

        if policy == MatchPolicy::Unique && has_repeats(&digits) {
            return Err(ValidationError::RepeatedDigitNotAllowed);
        }

        Ok(Self(digits))
    }

    /// Builds from raw digit values. Callers guarantee every value is `0..=9`.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_repeats(&self) -> bool {
        has_repeats(&self.0)
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

fn has_repeats(digits: &[u8]) -> bool {
    let mut seen = [false; 10];
    for &d in digits {
        if seen[d as usize] {
            return true;
        }
        seen[d as usize] = true;
    }
    false
}
