//! Attribute value
//!
//! Dynamic value exchanged between an entity adapter and the casts.

use super::{Currency, Money, MoneyRecord};

/// A raw or cast attribute value.
///
/// Raw storage values are `Text`, `Integer` or `Record`; `Currency` and
/// `Money` are the rich in-memory forms produced by the casts.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Record(MoneyRecord),
    Currency(Currency),
    Money(Money),
}

impl Value {
    /// Short name of the variant, used in type errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Record(_) => "record",
            Value::Currency(_) => "currency",
            Value::Money(_) => "money",
        }
    }

    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Value::Money(money) => Some(money),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<MoneyRecord> for Value {
    fn from(value: MoneyRecord) -> Self {
        Value::Record(value)
    }
}

impl From<Currency> for Value {
    fn from(value: Currency) -> Self {
        Value::Currency(value)
    }
}

impl From<Money> for Value {
    fn from(value: Money) -> Self {
        Value::Money(value)
    }
}
