//! Numeric currency table
//!
//! Process-wide bidirectional mapping between ISO numeric and alphabetic
//! currency codes. Built once on first use and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::{Currency, IsoCurrency, ISO_4217};
use crate::error::{CastError, CastResult};

static NUMERIC_TABLE: OnceLock<CastResult<NumericCurrencyTable>> = OnceLock::new();

/// Bijective numeric <-> alphabetic currency mapping.
#[derive(Debug, Clone)]
pub struct NumericCurrencyTable {
    by_numeric: HashMap<u16, Currency>,
    by_currency: HashMap<Currency, u16>,
}

impl NumericCurrencyTable {
    /// Shared table built from the ISO 4217 reference set.
    ///
    /// Concurrent first callers block until one complete table is published.
    pub fn global() -> CastResult<&'static NumericCurrencyTable> {
        NUMERIC_TABLE
            .get_or_init(|| Self::from_reference(ISO_4217))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build a table from reference entries.
    ///
    /// # Errors
    /// - `CastError::UnknownCurrencyCode` if an entry is malformed or a code
    ///   appears twice
    pub fn from_reference(entries: &[IsoCurrency]) -> CastResult<Self> {
        let mut by_numeric = HashMap::with_capacity(entries.len());
        let mut by_currency = HashMap::with_capacity(entries.len());

        for entry in entries {
            let currency = Currency::new(entry.code)?;
            if by_numeric.insert(entry.numeric, currency).is_some() {
                return Err(CastError::UnknownCurrencyCode(format!(
                    "numeric code {} is assigned twice",
                    entry.numeric
                )));
            }
            if by_currency.insert(currency, entry.numeric).is_some() {
                return Err(CastError::UnknownCurrencyCode(format!(
                    "{currency} is listed twice"
                )));
            }
        }

        tracing::debug!(currencies = by_numeric.len(), "Built numeric currency table");

        Ok(Self {
            by_numeric,
            by_currency,
        })
    }

    /// Currency for a numeric code
    pub fn currency_for(&self, numeric: u16) -> CastResult<Currency> {
        self.by_numeric
            .get(&numeric)
            .copied()
            .ok_or_else(|| CastError::UnknownCurrencyCode(format!("{numeric:03}")))
    }

    /// Numeric code for a currency
    pub fn numeric_for(&self, currency: Currency) -> CastResult<u16> {
        self.by_currency
            .get(&currency)
            .copied()
            .ok_or_else(|| CastError::UnknownCurrencyCode(currency.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_numeric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_numeric.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_table_is_bijective_over_reference_set() {
        let table = NumericCurrencyTable::global().unwrap();
        assert_eq!(table.len(), ISO_4217.len());

        for entry in ISO_4217 {
            let currency = Currency::new(entry.code).unwrap();
            let numeric = table.numeric_for(currency).unwrap();
            assert_eq!(numeric, entry.numeric);
            assert_eq!(table.currency_for(numeric).unwrap(), currency);
        }
    }

    #[test]
    fn test_known_pairs() {
        let table = NumericCurrencyTable::global().unwrap();
        assert_eq!(table.currency_for(978).unwrap().code(), "EUR");
        assert_eq!(table.currency_for(36).unwrap().code(), "AUD");
        assert_eq!(table.numeric_for(Currency::new("USD").unwrap()).unwrap(), 840);
    }

    #[test]
    fn test_unknown_codes() {
        let table = NumericCurrencyTable::global().unwrap();
        assert_eq!(
            table.currency_for(1),
            Err(CastError::UnknownCurrencyCode("001".to_string()))
        );
        assert!(table.numeric_for(Currency::new("ZZZ").unwrap()).is_err());
    }

    #[test]
    fn test_malformed_reference_is_rejected() {
        let duplicate_numeric = [
            IsoCurrency { code: "AAA", numeric: 1, minor_units: 2 },
            IsoCurrency { code: "BBB", numeric: 1, minor_units: 2 },
        ];
        assert!(matches!(
            NumericCurrencyTable::from_reference(&duplicate_numeric),
            Err(CastError::UnknownCurrencyCode(_))
        ));

        let bad_code = [IsoCurrency { code: "A1", numeric: 1, minor_units: 2 }];
        assert!(NumericCurrencyTable::from_reference(&bad_code).is_err());
    }

    #[test]
    fn test_concurrent_first_use_publishes_one_table() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| NumericCurrencyTable::global().map(|t| t as *const _ as usize)))
            .collect();

        let addresses: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
