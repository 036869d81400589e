//! The fixed secret code, held as two agent halves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits::{Half, HALF_LEN, SLOT_COUNT};
use crate::error::AccessError;

/// Secret code used when no configuration overrides it
pub const DEFAULT_SECRET: &str = "28461973";

/// Eight-digit secret split into a left and right half.
///
/// `Debug` never prints the digits; use [`SecretCode::expose`] where showing
/// the code is intended (the debug panel).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretCode {
    left: String,
    right: String,
}

impl SecretCode {
    /// Build a secret from two four-digit halves
    pub fn from_halves(left: &str, right: &str) -> Result<Self, AccessError> {
        format!("{left}{right}").parse()
    }

    /// The expected digits for one half
    pub fn half(&self, half: Half) -> &str {
        match half {
            Half::Left => &self.left,
            Half::Right => &self.right,
        }
    }

    /// The full eight-digit code
    pub fn expose(&self) -> String {
        format!("{}{}", self.left, self.right)
    }
}

impl Default for SecretCode {
    fn default() -> Self {
        let (left, right) = DEFAULT_SECRET.split_at(HALF_LEN);
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl FromStr for SecretCode {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != SLOT_COUNT || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccessError::InvalidSecret(format!(
                "expected {} decimal digits, got {} characters",
                SLOT_COUNT,
                code.chars().count()
            )));
        }
        let (left, right) = code.split_at(HALF_LEN);
        Ok(Self {
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

impl TryFrom<String> for SecretCode {
    type Error = AccessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SecretCode> for String {
    fn from(secret: SecretCode) -> Self {
        secret.expose()
    }
}

impl std::fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretCode(********)")
    }
}
