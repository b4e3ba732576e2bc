//! Money serializers
//!
//! Encoding strategies between a `Money` value and its raw storage form.
//! The strategy set is closed; configuration picks one by name through
//! [`MoneySerializer::resolve`].

use std::fmt;
use std::str::FromStr;

use crate::domain::amount::format_major_units;
use crate::domain::{Currency, DecimalAmount, Money, MoneyRecord, Value};
use crate::error::{CastError, CastResult};

/// Storage encoding strategy for money amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneySerializer {
    /// Integer minor units as a decimal string, e.g. `"1999"`
    #[default]
    MinorUnit,
    /// Major units with the currency's exponent, e.g. `"19.99"`
    Decimal,
    /// Record carrying both amount and currency code
    Structured,
}

impl MoneySerializer {
    /// Resolve a strategy from its configured name.
    ///
    /// Names are case-insensitive and `-`/`_` are interchangeable.
    ///
    /// # Errors
    /// - `CastError::SerializerResolution` for an unknown name
    pub fn resolve(name: &str) -> CastResult<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "minor_unit" | "minor" | "simple" | "integer" => Ok(Self::MinorUnit),
            "decimal" => Ok(Self::Decimal),
            "structured" | "json" => Ok(Self::Structured),
            _ => Err(CastError::SerializerResolution(name.trim().to_string())),
        }
    }

    /// Canonical strategy name
    pub fn name(&self) -> &'static str {
        match self {
            Self::MinorUnit => "minor_unit",
            Self::Decimal => "decimal",
            Self::Structured => "structured",
        }
    }

    /// Encode money into its raw storage form.
    ///
    /// # Errors
    /// - `CastError::UnknownCurrencyCode` for the decimal strategy when the
    ///   currency has no ISO exponent
    pub fn serialize(&self, money: &Money) -> CastResult<Value> {
        match self {
            Self::MinorUnit => Ok(Value::Text(money.amount().to_string())),
            Self::Decimal => {
                let exponent = money.currency().minor_units()?;
                Ok(Value::Text(format_major_units(money.amount(), exponent)))
            }
            Self::Structured => Ok(Value::Record(money.to_record())),
        }
    }

    /// Decode a raw storage value into money.
    ///
    /// `fallback` supplies the currency for amount-only representations. A
    /// structured record always uses its embedded currency.
    pub fn deserialize(&self, raw: &Value, fallback: Option<Currency>) -> CastResult<Money> {
        match self {
            Self::MinorUnit => {
                let amount = amount_of(raw)?;
                let currency = self.fallback(fallback)?;
                scale_to_minor_units(&amount, 0, currency)
            }
            Self::Decimal => {
                let major = amount_of(raw)?;
                let currency = self.fallback(fallback)?;
                let exponent = currency.minor_units()?;
                scale_to_minor_units(&major, exponent, currency)
            }
            Self::Structured => match raw {
                Value::Record(record) => Money::try_from(record.clone()),
                Value::Text(text) if text.trim_start().starts_with('{') => {
                    let record: MoneyRecord = serde_json::from_str(text)
                        .map_err(|e| CastError::InvalidAmount(format!("malformed money record: {e}")))?;
                    Money::try_from(record)
                }
                // Bare amount without embedded currency: minor units in the fallback
                _ => {
                    let amount = amount_of(raw)?;
                    let currency = self.fallback(fallback)?;
                    scale_to_minor_units(&amount, 0, currency)
                }
            },
        }
    }

    fn fallback(&self, fallback: Option<Currency>) -> CastResult<Currency> {
        fallback.ok_or(CastError::MissingFallbackCurrency {
            strategy: self.name(),
        })
    }
}

impl fmt::Display for MoneySerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoneySerializer {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoneySerializer::resolve(s)
    }
}

/// Read a numeric amount out of a text or integer raw value
fn amount_of(raw: &Value) -> CastResult<DecimalAmount> {
    match raw {
        Value::Text(text) => text.parse(),
        Value::Integer(value) => Ok(DecimalAmount::from(*value)),
        other => Err(CastError::invalid_type("amount", other)),
    }
}

/// Scale an amount with `exponent` fraction digits into minor units,
/// rejecting anything that would need rounding
fn scale_to_minor_units(amount: &DecimalAmount, exponent: u32, currency: Currency) -> CastResult<Money> {
    match amount.scaled_to_integer(exponent) {
        Some(minor) => Ok(Money::new(minor, currency)),
        None => Err(CastError::InvalidAmount(format!(
            "{} decimal places do not fit {currency}, which has {exponent}",
            amount.scale()
        ))),
    }
}
