//! Currency type
//!
//! Opaque three-letter alphabetic currency identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CastError, CastResult};

use super::iso;

/// Length of an ISO 4217 alphabetic code
pub const CODE_LENGTH: usize = 3;

/// Currency identified by its uppercase alphabetic code.
///
/// Equality is code equality. Construction only checks the shape of the
/// code; membership in the ISO table is checked by the operations that need
/// reference data (`minor_units`, `numeric_code`).
///
/// # Example
/// ```
/// use castable_money::domain::Currency;
///
/// let eur = Currency::new("eur").unwrap();
/// assert_eq!(eur.code(), "EUR");
/// assert_eq!(eur.minor_units().unwrap(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; CODE_LENGTH]);

impl Currency {
    /// Create a currency from an alphabetic code (case-insensitive).
    ///
    /// # Errors
    /// - `CastError::UnknownCurrencyCode` if the code is not three ASCII letters
    pub fn new(code: &str) -> CastResult<Self> {
        let trimmed = code.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != CODE_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CastError::UnknownCurrencyCode(trimmed.to_string()));
        }

        let mut buf = [0u8; CODE_LENGTH];
        for (slot, byte) in buf.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(buf))
    }

    /// Alphabetic code
    pub fn code(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Number of fraction digits in the currency's minor unit.
    ///
    /// # Errors
    /// - `CastError::UnknownCurrencyCode` if the currency is not in ISO 4217
    pub fn minor_units(&self) -> CastResult<u32> {
        iso::find(self.code())
            .map(|entry| entry.minor_units)
            .ok_or_else(|| CastError::UnknownCurrencyCode(self.code().to_string()))
    }

    /// ISO numeric code, through the shared numeric table.
    pub fn numeric_code(&self) -> CastResult<u16> {
        crate::casts::NumericCurrencyTable::global()?.numeric_for(*self)
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.code()).finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_normalizes_case() {
        let usd = Currency::new(" usd ").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd, "USD".parse().unwrap());
    }

    #[test]
    fn test_currency_rejects_malformed_codes() {
        for code in ["", "US", "USDX", "U5D", "€UR"] {
            assert!(
                matches!(Currency::new(code), Err(CastError::UnknownCurrencyCode(_))),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_currency_outside_iso_has_no_exponent() {
        let fake = Currency::new("ZZZ").unwrap();
        assert_eq!(
            fake.minor_units(),
            Err(CastError::UnknownCurrencyCode("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_currency_serde_as_string() {
        let gbp = Currency::new("GBP").unwrap();
        assert_eq!(serde_json::to_string(&gbp).unwrap(), "\"GBP\"");
        assert_eq!(serde_json::from_str::<Currency>("\"gbp\"").unwrap(), gbp);
        assert!(serde_json::from_str::<Currency>("\"GB\"").is_err());
    }
}
