//! Code evaluation: compares both halves of the entered code against the secret.

use serde::{Deserialize, Serialize};

use crate::digits::{DigitSequence, Half};
use crate::secret::SecretCode;

/// Outcome shown after the last submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Neither half matched
    Error,
    /// Only the left agent's half matched
    LeftAuthenticated,
    /// Only the right agent's half matched
    RightAuthenticated,
    /// Both halves matched
    Success,
}

impl Status {
    /// Stable name used in logs and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Error => "error",
            Status::LeftAuthenticated => "left-authenticated",
            Status::RightAuthenticated => "right-authenticated",
            Status::Success => "success",
        }
    }

    /// Whether only one of the two halves matched
    pub fn is_partial(&self) -> bool {
        matches!(self, Status::LeftAuthenticated | Status::RightAuthenticated)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a half is completely filled and equal to the secret's half
fn half_matches(digits: &DigitSequence, secret: &SecretCode, half: Half) -> bool {
    digits
        .half(half)
        .is_some_and(|entered| entered == secret.half(half))
}

/// Evaluate the entered digits against the secret.
///
/// Both halves matching wins over a single half; a half with any empty slot
/// never matches.
pub fn evaluate(digits: &DigitSequence, secret: &SecretCode) -> Status {
    let left = half_matches(digits, secret, Half::Left);
    let right = half_matches(digits, secret, Half::Right);

    match (left, right) {
        (true, true) => Status::Success,
        (true, false) => Status::LeftAuthenticated,
        (false, true) => Status::RightAuthenticated,
        (false, false) => Status::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::SlotIndex;

    fn digits_from(code: &str) -> DigitSequence {
        let mut digits = DigitSequence::new();
        for (slot, c) in SlotIndex::all().zip(code.chars()) {
            digits.set(slot, (c != '_').then_some(c));
        }
        digits
    }

    #[test]
    fn both_halves_succeed() {
        let secret = SecretCode::default();
        assert_eq!(evaluate(&digits_from("28461973"), &secret), Status::Success);
    }

    #[test]
    fn left_half_only() {
        let secret = SecretCode::default();
        assert_eq!(
            evaluate(&digits_from("28460000"), &secret),
            Status::LeftAuthenticated
        );
    }

    #[test]
    fn right_half_only() {
        let secret = SecretCode::default();
        assert_eq!(
            evaluate(&digits_from("00001973"), &secret),
            Status::RightAuthenticated
        );
    }

    #[test]
    fn nothing_matches() {
        let secret = SecretCode::default();
        assert_eq!(evaluate(&digits_from("00000000"), &secret), Status::Error);
        assert_eq!(evaluate(&DigitSequence::new(), &secret), Status::Error);
    }

    #[test]
    fn incomplete_half_never_matches() {
        let secret = SecretCode::default();
        assert_eq!(
            evaluate(&digits_from("284_1973"), &secret),
            Status::RightAuthenticated
        );
        assert_eq!(
            evaluate(&digits_from("2846197_"), &secret),
            Status::LeftAuthenticated
        );
    }

    #[test]
    fn status_names() {
        assert_eq!(Status::default(), Status::Idle);
        assert_eq!(Status::LeftAuthenticated.to_string(), "left-authenticated");
        assert!(Status::RightAuthenticated.is_partial());
        assert!(!Status::Success.is_partial());
    }
}
