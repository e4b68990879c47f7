//! # Team Identifier Model
//!
//! A team number is a positive integer of 1 to 5 decimal digits. It arrives
//! either as a native integer or as a string of digits (surrounding
//! whitespace allowed) and is normalized to its numeric value, so `"007"`
//! is the one-digit team `7`.

pub mod selection;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::SubnetError;

pub const MAX_TEAM_DIGITS: usize = 5;
pub const MAX_TEAM_NUMBER: u32 = 99_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamNumber(u32);

impl TeamNumber {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of decimal digits of the value, 1 to 5.
    pub fn digits(self) -> usize {
        self.0.checked_ilog10().map_or(1, |log| log as usize + 1)
    }

    fn checked(value: u64, input: impl Into<String>) -> Result<Self, SubnetError> {
        match u32::try_from(value) {
            Ok(value) if (1..=MAX_TEAM_NUMBER).contains(&value) => Ok(Self(value)),
            _ => Err(SubnetError::InvalidLength {
                input: input.into(),
            }),
        }
    }
}

impl fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for TeamNumber {
    type Error = SubnetError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::checked(value, value.to_string())
    }
}

impl TryFrom<i64> for TeamNumber {
    type Error = SubnetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u64::try_from(value) {
            Ok(unsigned) => Self::checked(unsigned, value.to_string()),
            Err(_) => Err(SubnetError::InvalidLength {
                input: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u32> for TeamNumber {
    type Error = SubnetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl FromStr for TeamNumber {
    type Err = SubnetError;

    /// Parses a string of decimal digits.
    ///
    /// Signs, separators and non-ASCII digits are rejected as
    /// [`SubnetError::InvalidInput`]. The length check runs on the value, so
    /// leading zeros never count and arbitrarily long digit strings are
    /// reported as [`SubnetError::InvalidLength`] rather than overflowing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidInput {
                input: s.to_string(),
            });
        }

        let significant = trimmed.trim_start_matches('0');
        if significant.len() > MAX_TEAM_DIGITS {
            return Err(SubnetError::InvalidLength {
                input: s.to_string(),
            });
        }

        // at most five ASCII digits, or empty for an all-zero input
        let value = significant.parse::<u64>().unwrap_or(0);
        Self::checked(value, s)
    }
}

impl TryFrom<&Value> for TeamNumber {
    type Error = SubnetError;

    /// Accepts JSON integers and digit strings; everything else is not a
    /// team identifier.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => {
                if let Some(signed) = number.as_i64() {
                    Self::try_from(signed)
                } else if let Some(unsigned) = number.as_u64() {
                    Self::try_from(unsigned)
                } else if number.as_f64().is_some_and(is_oversized_integer) {
                    // integer literals beyond u64 arrive as floats
                    Err(SubnetError::InvalidLength {
                        input: number.to_string(),
                    })
                } else {
                    Err(SubnetError::InvalidInput {
                        input: number.to_string(),
                    })
                }
            }
            Value::String(s) => s.parse(),
            other => Err(SubnetError::InvalidInput {
                input: other.to_string(),
            }),
        }
    }
}

/// Whole value outside every machine integer range, i.e. far more than
/// five digits. Fractions and small floats stay plain invalid input.
fn is_oversized_integer(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && (value >= u64::MAX as f64 || value < i64::MIN as f64)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
