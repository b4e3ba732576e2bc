//! Currency cast
//!
//! Maps a stored currency representation to a `Currency` and back.

use crate::domain::{Currency, Value};
use crate::entity::Entity;
use crate::error::{CastError, CastResult};

use super::{AttributeCast, NumericCurrencyTable, SetOutcome};

/// How a currency attribute is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyCast {
    /// Alphabetic code, e.g. `"EUR"`
    #[default]
    Alphabetic,
    /// ISO numeric code, e.g. `978`
    Numeric,
}

impl CurrencyCast {
    /// Read a currency from its raw stored form
    pub fn to_currency(&self, raw: &Value) -> CastResult<Currency> {
        match (self, raw) {
            (_, Value::Currency(currency)) => Ok(*currency),
            (Self::Alphabetic, Value::Text(code)) => Currency::new(code),
            (Self::Numeric, Value::Integer(numeric)) => {
                let numeric = u16::try_from(*numeric)
                    .map_err(|_| CastError::UnknownCurrencyCode(numeric.to_string()))?;
                NumericCurrencyTable::global()?.currency_for(numeric)
            }
            (Self::Numeric, Value::Text(text)) => {
                let numeric = text
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| CastError::UnknownCurrencyCode(text.trim().to_string()))?;
                NumericCurrencyTable::global()?.currency_for(numeric)
            }
            (_, other) => Err(CastError::invalid_type("currency code", other)),
        }
    }

    /// Raw stored form of a currency
    pub fn to_raw(&self, currency: Currency) -> CastResult<Value> {
        match self {
            Self::Alphabetic => Ok(Value::Text(currency.code().to_string())),
            Self::Numeric => {
                let numeric = NumericCurrencyTable::global()?.numeric_for(currency)?;
                Ok(Value::Integer(i64::from(numeric)))
            }
        }
    }
}

impl AttributeCast for CurrencyCast {
    fn get(&self, _entity: &dyn Entity, _key: &str, raw: Option<&Value>) -> CastResult<Option<Value>> {
        raw.map(|raw| self.to_currency(raw).map(Value::Currency))
            .transpose()
    }

    fn set(&self, _entity: &mut dyn Entity, _key: &str, value: Option<Value>) -> CastResult<SetOutcome> {
        match value {
            None => Ok(SetOutcome::Absent),
            Some(Value::Currency(currency)) => self.to_raw(currency).map(SetOutcome::Value),
            Some(other) => Err(CastError::invalid_type("currency", &other)),
        }
    }

    fn serialize(
        &self,
        _entity: &dyn Entity,
        _key: &str,
        value: Option<&Value>,
    ) -> CastResult<Option<serde_json::Value>> {
        match value {
            None => Ok(None),
            Some(Value::Currency(currency)) => {
                Ok(Some(serde_json::Value::String(currency.code().to_string())))
            }
            Some(other) => Err(CastError::invalid_type("currency", other)),
        }
    }
}
