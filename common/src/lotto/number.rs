use std::fmt;
use std::str::FromStr;

use crate::error::LottoError;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;

/// A single lotto number, always within `[MIN_NUMBER, MAX_NUMBER]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LottoNumber(u8);

impl LottoNumber {
    pub fn new(value: u8) -> Result<Self, LottoError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(LottoError::InvalidNumber(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every valid number, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_NUMBER..=MAX_NUMBER).map(Self)
    }
}

impl FromStr for LottoNumber {
    type Err = LottoError;

    /// Parses a decimal number, ignoring surrounding whitespace.
    ///
    /// Only ASCII digits are accepted, so signs (`+7`, `-1`) are rejected
    /// just like any other non-numeric input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LottoError::InvalidNumber(s.to_string()));
        }

        let value = trimmed
            .parse::<u8>()
            .map_err(|_| LottoError::InvalidNumber(s.to_string()))?;

        Self::new(value)
    }
}

impl TryFrom<u8> for LottoNumber {
    type Error = LottoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
