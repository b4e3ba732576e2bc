//! Money type
//!
//! Immutable amount of minor units paired with its currency.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CastError, CastResult};

use super::{Currency, DecimalAmount};

/// Money represents an exact amount in a currency's minor unit.
///
/// # Invariants
/// - The amount is an integer of unbounded size
/// - A currency is always present
///
/// # Example
/// ```
/// use castable_money::domain::{Currency, Money};
///
/// let eur = Currency::new("EUR").unwrap();
/// let price = Money::new(1999, eur);
/// assert_eq!(price.to_string(), "1999 EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: BigInt,
    currency: Currency,
}

/// External form of a money value: minor-unit amount string plus code.
///
/// This is also the raw record stored by the structured serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    pub amount: String,
    pub currency: String,
}

impl Money {
    /// Create money from an integer number of minor units
    pub fn new(amount: impl Into<BigInt>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    /// Parse a minor-unit amount string such as `"-1500"` or `"1500.00"`.
    ///
    /// # Errors
    /// - `CastError::InvalidAmount` if the text is not a number or has a
    ///   non-zero fractional part
    pub fn parse_minor_units(raw: &str, currency: Currency) -> CastResult<Self> {
        let amount = raw.parse::<DecimalAmount>()?.scaled_to_integer(0).ok_or_else(|| {
            CastError::InvalidAmount(format!(
                "{} is not a whole number of {currency} minor units",
                raw.trim()
            ))
        })?;

        Ok(Self::new(amount, currency))
    }

    /// Amount in minor units
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add money of the same currency.
    ///
    /// # Errors
    /// - `CastError::CurrencyMismatch` if the currencies differ
    pub fn try_add(&self, other: &Money) -> CastResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(&self.amount + &other.amount, self.currency))
    }

    /// Subtract money of the same currency.
    pub fn try_sub(&self, other: &Money) -> CastResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(&self.amount - &other.amount, self.currency))
    }

    /// External (amount, currency) form
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            amount: self.amount.to_string(),
            currency: self.currency.code().to_string(),
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> CastResult<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(CastError::currency_mismatch(self.currency, other.currency))
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = CastError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        let currency = Currency::new(&record.currency)?;
        Money::parse_minor_units(&record.amount, currency)
    }
}

impl From<&Money> for MoneyRecord {
    fn from(money: &Money) -> Self {
        money.to_record()
    }
}
