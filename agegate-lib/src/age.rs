//! Contains the logic for converting the raw age token into a numeric value.

use crate::error::GateError;
use std::str::FromStr;

/// A guest's age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(i64);

impl Age {
    /// Converts a token with best-effort semantics.
    ///
    /// Leading whitespace and an optional sign are skipped, then digits are
    /// consumed until the first non-digit character. A token with no leading
    /// digits yields 0, and values beyond the `i64` range saturate. A token
    /// that is not consumed in full is reported at `warn` level; the returned
    /// value is still used.
    pub fn lossy(token: &str) -> Age {
        let trimmed = token.trim_start();

        let (negative, unsigned) = match trimmed.strip_prefix(['-', '+']) {
            Some(rest) => (trimmed.starts_with('-'), rest),
            None => (false, trimmed),
        };

        let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();

        let mut years: i64 = 0;
        for digit in unsigned[..digit_count].bytes() {
            years = years
                .saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'));
        }
        if negative {
            years = years.saturating_neg();
        }

        if digit_count == 0 || digit_count != unsigned.len() {
            log::warn!("Age token {token:?} is not fully numeric; using {years}.");
        }

        Age(years)
    }

    /// Returns the age in whole years.
    pub fn years(self) -> i64 {
        self.0
    }
}

impl FromStr for Age {
    type Err = GateError;

    /// Strict conversion: the entire token, ignoring surrounding whitespace,
    /// must be a signed decimal integer.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        token
            .trim()
            .parse::<i64>()
            .map(Age)
            .map_err(|_| GateError::InvalidAge(token.to_string()))
    }
}
