//! Decimal amount
//!
//! Exact parsing and formatting of base-10 amount strings of any length.
//! Nothing is ever rounded: an amount either scales to a whole number of
//! minor units or is rejected.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::str::FromStr;

use crate::error::CastError;

/// A parsed decimal number: `mantissa / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalAmount {
    mantissa: BigInt,
    scale: u32,
}

impl DecimalAmount {
    /// Number of fractional digits as written
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Multiply by `10^exponent`, returning `None` if the result is not a
    /// whole number.
    pub fn scaled_to_integer(&self, exponent: u32) -> Option<BigInt> {
        if self.scale <= exponent {
            return Some(&self.mantissa * pow10(exponent - self.scale));
        }

        let divisor = pow10(self.scale - exponent);
        if (&self.mantissa % &divisor).is_zero() {
            Some(&self.mantissa / divisor)
        } else {
            None
        }
    }
}

impl FromStr for DecimalAmount {
    type Err = CastError;

    /// Parses `[+-]digits[.digits]`. Exponents, separators and blanks
    /// inside the number are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CastError::InvalidAmount("empty amount".to_string()));
        }
        let invalid = || CastError::InvalidAmount(format!("\"{trimmed}\" is not a decimal number"));

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{whole}{fraction}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;

        Ok(Self {
            mantissa: if negative { -magnitude } else { magnitude },
            scale,
        })
    }
}

impl From<i64> for DecimalAmount {
    fn from(value: i64) -> Self {
        Self {
            mantissa: BigInt::from(value),
            scale: 0,
        }
    }
}

/// Format a minor-unit integer as major units with `exponent` fraction digits
pub fn format_major_units(minor: &BigInt, exponent: u32) -> String {
    if exponent == 0 {
        return minor.to_string();
    }

    let width = exponent as usize + 1;
    let digits = format!("{:0>width$}", minor.magnitude().to_string());
    let (whole, fraction) = digits.split_at(digits.len() - exponent as usize);
    let sign = if minor.is_negative() { "-" } else { "" };
    format!("{sign}{whole}.{fraction}")
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}
