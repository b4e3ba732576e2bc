//! Money cast
//!
//! Resolves where the currency of a money attribute lives, keeps amount and
//! currency consistent on reads and writes, and delegates the amount
//! encoding to a [`MoneySerializer`].

use std::collections::BTreeMap;

use crate::deviator::MoneyDeviator;
use crate::domain::{Currency, Money, Value};
use crate::entity::Entity;
use crate::error::{CastError, CastResult};
use crate::serializer::MoneySerializer;

use super::guard::WriteGuard;
use super::{AttributeCast, SetOutcome};

/// Default attribute holding the currency
pub const DEFAULT_CURRENCY_ATTRIBUTE: &str = "currency";

/// Where the currency of a money attribute is kept, from the entity's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurrencySlot {
    /// Declared cast or mutator that accepts a currency; driven by the money value
    Writable,
    /// Related entity, public immutable field or read-only attribute; authoritative
    Fixed,
    /// Ordinary attribute holding a plain alphabetic code
    Plain,
}

/// Cast between a stored amount and a `Money` value.
///
/// The amount attribute is the `key` passed by the framework on each call;
/// the cast itself holds the currency path and the serializer.
#[derive(Debug, Clone)]
pub struct MoneyCast {
    currency_attribute: String,
    serializer: MoneySerializer,
}

impl MoneyCast {
    /// Create a cast, resolving the serializer by name.
    ///
    /// # Errors
    /// - `CastError::SerializerResolution` if the strategy name is unknown
    pub fn new(currency_attribute: impl Into<String>, serializer: &str) -> CastResult<Self> {
        let serializer = MoneySerializer::resolve(serializer)?;
        Ok(Self::with_serializer(currency_attribute, serializer))
    }

    pub fn with_serializer(currency_attribute: impl Into<String>, serializer: MoneySerializer) -> Self {
        Self {
            currency_attribute: currency_attribute.into(),
            serializer,
        }
    }

    /// Cast storing major units, e.g. `"19.99"`
    pub fn decimal(currency_attribute: impl Into<String>) -> Self {
        Self::with_serializer(currency_attribute, MoneySerializer::Decimal)
    }

    /// Cast storing an amount+currency record
    pub fn structured(currency_attribute: impl Into<String>) -> Self {
        Self::with_serializer(currency_attribute, MoneySerializer::Structured)
    }

    pub fn currency_attribute(&self) -> &str {
        &self.currency_attribute
    }

    pub fn serializer(&self) -> MoneySerializer {
        self.serializer
    }

    /// Read path: materialize a stored amount with the entity's currency.
    ///
    /// Absent raw values read as `None`.
    pub fn read(&self, entity: &dyn Entity, raw: Option<&Value>) -> CastResult<Option<Money>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let currency = self.resolve_currency(entity)?;
        self.serializer.deserialize(raw, currency).map(Some)
    }

    /// Write path: decide what to store for an assigned value.
    pub fn write(&self, entity: &mut dyn Entity, key: &str, value: Option<Value>) -> CastResult<SetOutcome> {
        let money = match value {
            None => return Ok(SetOutcome::Absent),
            Some(Value::Money(money)) => money,
            Some(other) => return Err(CastError::invalid_type("money", &other)),
        };

        let Some(_guard) = WriteGuard::acquire(&*entity, key) else {
            tracing::debug!(key, "Skipping re-entrant money write");
            return Ok(SetOutcome::Skipped);
        };

        match self.classify(&*entity) {
            CurrencySlot::Writable => {
                tracing::trace!(
                    key,
                    currency_attribute = %self.currency_attribute,
                    currency = %money.currency(),
                    "Assigning currency from money value"
                );
                let amount = self.serializer.serialize(&money)?;
                entity.set_value(&self.currency_attribute, Value::Currency(money.currency()))?;
                Ok(SetOutcome::Value(amount))
            }
            CurrencySlot::Fixed => {
                let required = self
                    .resolve_currency(&*entity)?
                    .ok_or_else(|| CastError::UnresolvedCurrency(self.currency_attribute.clone()))?;

                if required != money.currency() {
                    tracing::debug!(
                        key,
                        required = %required,
                        provided = %money.currency(),
                        "Money currency does not match fixed currency"
                    );
                    return Err(CastError::currency_mismatch(required, money.currency()));
                }

                tracing::trace!(key, currency_attribute = %self.currency_attribute, "Fixed currency matches");
                self.serializer.serialize(&money).map(SetOutcome::Value)
            }
            CurrencySlot::Plain => {
                tracing::trace!(
                    key,
                    currency_attribute = %self.currency_attribute,
                    "Storing amount and currency code together"
                );
                let mut values = BTreeMap::new();
                values.insert(key.to_string(), self.serializer.serialize(&money)?);
                values.insert(
                    self.currency_attribute.clone(),
                    Value::Text(money.currency().code().to_string()),
                );
                Ok(SetOutcome::Attributes(values))
            }
        }
    }

    /// Current value plus a raw delta, in the current value's currency.
    ///
    /// Returns `None` when the attribute holds no value.
    pub fn increment(&self, entity: &dyn Entity, key: &str, delta: &str) -> CastResult<Option<Money>> {
        let deviator = MoneyDeviator::new(self.serializer);
        self.current(entity, key)?
            .map(|money| deviator.add(&money, delta))
            .transpose()
    }

    /// Current value minus a raw delta, in the current value's currency.
    pub fn decrement(&self, entity: &dyn Entity, key: &str, delta: &str) -> CastResult<Option<Money>> {
        let deviator = MoneyDeviator::new(self.serializer);
        self.current(entity, key)?
            .map(|money| deviator.subtract(&money, delta))
            .transpose()
    }

    fn current(&self, entity: &dyn Entity, key: &str) -> CastResult<Option<Money>> {
        if !entity.has_value(key) {
            return Ok(None);
        }

        match entity.get_value(key)? {
            None => Ok(None),
            Some(Value::Money(money)) => Ok(Some(money)),
            Some(raw) => self.read(entity, Some(&raw)),
        }
    }

    fn classify(&self, entity: &dyn Entity) -> CurrencySlot {
        let path = self.currency_attribute.as_str();

        if entity.is_writable_cast(path) {
            CurrencySlot::Writable
        } else if path.contains('.')
            || entity.is_public_immutable_field(path)
            || entity.has_read_derivation(path)
        {
            CurrencySlot::Fixed
        } else {
            CurrencySlot::Plain
        }
    }

    fn resolve_currency(&self, entity: &dyn Entity) -> CastResult<Option<Currency>> {
        match entity.get_value(&self.currency_attribute)? {
            None => Ok(None),
            Some(Value::Currency(currency)) => Ok(Some(currency)),
            Some(Value::Text(code)) => Currency::new(&code).map(Some),
            Some(other) => Err(CastError::invalid_type("currency", &other)),
        }
    }
}

impl Default for MoneyCast {
    fn default() -> Self {
        Self::with_serializer(DEFAULT_CURRENCY_ATTRIBUTE, MoneySerializer::default())
    }
}

impl AttributeCast for MoneyCast {
    fn get(&self, entity: &dyn Entity, _key: &str, raw: Option<&Value>) -> CastResult<Option<Value>> {
        self.read(entity, raw).map(|money| money.map(Value::Money))
    }

    fn set(&self, entity: &mut dyn Entity, key: &str, value: Option<Value>) -> CastResult<SetOutcome> {
        self.write(entity, key, value)
    }

    fn serialize(
        &self,
        _entity: &dyn Entity,
        _key: &str,
        value: Option<&Value>,
    ) -> CastResult<Option<serde_json::Value>> {
        match value {
            None => Ok(None),
            Some(Value::Money(money)) => {
                let record = money.to_record();
                Ok(Some(serde_json::json!({
                    "amount": record.amount,
                    "currency": record.currency,
                })))
            }
            Some(other) => Err(CastError::invalid_type("money", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casts::CurrencyCast;
    use crate::entity::MemoryEntity;

    fn currency(code: &str) -> Currency {
        Currency::new(code).unwrap()
    }

    fn money(amount: i64, code: &str) -> Value {
        Value::Money(Money::new(amount, currency(code)))
    }

    #[test]
    fn test_new_resolves_serializer_at_construction() {
        let cast = MoneyCast::new("currency", "decimal").unwrap();
        assert_eq!(cast.serializer(), MoneySerializer::Decimal);

        assert_eq!(
            MoneyCast::new("currency", "xml").unwrap_err(),
            CastError::SerializerResolution("xml".to_string())
        );
    }

    #[test]
    fn test_default_cast() {
        let cast = MoneyCast::default();
        assert_eq!(cast.currency_attribute(), "currency");
        assert_eq!(cast.serializer(), MoneySerializer::MinorUnit);
    }

    #[test]
    fn test_read_absent_amount_is_none() {
        let entity = MemoryEntity::new();
        assert_eq!(MoneyCast::default().read(&entity, None).unwrap(), None);
    }

    #[test]
    fn test_read_without_currency_needs_fallback() {
        let entity = MemoryEntity::new();
        let result = MoneyCast::default().read(&entity, Some(&Value::from("100")));

        assert_eq!(
            result,
            Err(CastError::MissingFallbackCurrency {
                strategy: "minor_unit"
            })
        );
    }

    #[test]
    fn test_read_uses_cast_currency_attribute() {
        let entity = MemoryEntity::new()
            .with_currency_cast("currency", CurrencyCast::Numeric)
            .with_attribute("currency", Value::Integer(392));

        let read = MoneyCast::default()
            .read(&entity, Some(&Value::from("500")))
            .unwrap();
        assert_eq!(read, Some(Money::new(500, currency("JPY"))));
    }

    #[test]
    fn test_write_absent_has_no_side_effects() {
        let mut entity = MemoryEntity::new().with_attribute("currency", "EUR");
        let outcome = MoneyCast::default().write(&mut entity, "price", None).unwrap();

        assert_eq!(outcome, SetOutcome::Absent);
        assert_eq!(entity.attribute("currency"), Some(&Value::from("EUR")));
    }

    #[test]
    fn test_write_rejects_non_money() {
        let mut entity = MemoryEntity::new();
        let result = MoneyCast::default().write(&mut entity, "price", Some(Value::from("1999")));

        assert_eq!(
            result,
            Err(CastError::InvalidValueType {
                expected: "money",
                found: "text"
            })
        );
    }

    #[test]
    fn test_writable_currency_is_driven_by_money() {
        let mut entity = MemoryEntity::new()
            .with_currency_cast("currency", CurrencyCast::Alphabetic)
            .with_attribute("currency", "USD");

        let outcome = MoneyCast::default()
            .write(&mut entity, "price", Some(money(1999, "EUR")))
            .unwrap();

        assert_eq!(outcome, SetOutcome::Value(Value::from("1999")));
        assert_eq!(entity.attribute("currency"), Some(&Value::from("EUR")));
    }

    #[test]
    fn test_writable_takes_precedence_over_read_derivation() {
        let mut entity = MemoryEntity::new()
            .with_currency_cast("currency", CurrencyCast::Alphabetic)
            .with_read_derivation("currency", "GBP");

        let outcome = MoneyCast::default()
            .write(&mut entity, "price", Some(money(10, "USD")))
            .unwrap();
        assert_eq!(outcome, SetOutcome::Value(Value::from("10")));
    }

    #[test]
    fn test_immutable_field_is_authoritative() {
        let mut entity = MemoryEntity::new().with_immutable_field("currency", "CHF");
        let cast = MoneyCast::decimal("currency");

        let outcome = cast.write(&mut entity, "fee", Some(money(250, "CHF"))).unwrap();
        assert_eq!(outcome, SetOutcome::Value(Value::from("2.50")));

        let result = cast.write(&mut entity, "fee", Some(money(250, "EUR")));
        assert_eq!(
            result,
            Err(CastError::currency_mismatch(currency("CHF"), currency("EUR")))
        );
        assert_eq!(entity.get_value("currency"), Ok(Some(Value::from("CHF"))));
    }

    #[test]
    fn test_read_reports_unreadable_currency_attribute() {
        let entity = MemoryEntity::new()
            .with_currency_cast("currency", CurrencyCast::Numeric)
            .with_attribute("currency", Value::Integer(1));

        let result = MoneyCast::default().read(&entity, Some(&Value::from("500")));
        assert_eq!(result, Err(CastError::UnknownCurrencyCode("001".to_string())));
    }

    #[test]
    fn test_read_derivation_is_authoritative() {
        let mut entity =
            MemoryEntity::new().with_read_derivation("currency", Value::Currency(currency("JPY")));

        let result = MoneyCast::default().write(&mut entity, "price", Some(money(1, "USD")));
        assert!(matches!(result, Err(CastError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_unresolved_fixed_currency() {
        let mut entity = MemoryEntity::new().with_relation("account", MemoryEntity::new());
        let cast = MoneyCast::structured("account.currency");

        let result = cast.write(&mut entity, "balance", Some(money(1, "USD")));
        assert_eq!(
            result,
            Err(CastError::UnresolvedCurrency("account.currency".to_string()))
        );
    }

    #[test]
    fn test_plain_attribute_stores_amount_and_code() {
        let mut entity = MemoryEntity::new();
        let outcome = MoneyCast::structured("currency")
            .write(&mut entity, "total", Some(money(42, "SEK")))
            .unwrap();

        let SetOutcome::Attributes(values) = outcome else {
            panic!("expected attribute map");
        };
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("currency"), Some(&Value::from("SEK")));
        assert!(matches!(values.get("total"), Some(Value::Record(_))));
    }

    #[test]
    fn test_guard_released_after_failed_write() {
        let mut entity = MemoryEntity::new().with_immutable_field("currency", "CHF");
        let cast = MoneyCast::default();

        assert!(cast.write(&mut entity, "fee", Some(money(1, "EUR"))).is_err());

        let outcome = cast.write(&mut entity, "fee", Some(money(1, "CHF"))).unwrap();
        assert_eq!(outcome, SetOutcome::Value(Value::from("1")));
    }

    #[test]
    fn test_serialize_hook_ignores_currency_slot() {
        let entity = MemoryEntity::new().with_immutable_field("currency", "CHF");
        let cast = MoneyCast::default();

        let external = cast
            .serialize(&entity, "fee", Some(&money(1999, "EUR")))
            .unwrap();
        assert_eq!(
            external,
            Some(serde_json::json!({"amount": "1999", "currency": "EUR"}))
        );
        assert_eq!(cast.serialize(&entity, "fee", None).unwrap(), None);
        assert!(matches!(
            cast.serialize(&entity, "fee", Some(&Value::Integer(1))),
            Err(CastError::InvalidValueType { .. })
        ));
    }

    #[test]
    fn test_increment_and_decrement() {
        let entity = MemoryEntity::new()
            .with_attribute("price", "12.34")
            .with_attribute("currency", "USD");
        let cast = MoneyCast::decimal("currency");

        assert_eq!(
            cast.increment(&entity, "price", "1.50").unwrap(),
            Some(Money::new(1384, currency("USD")))
        );
        assert_eq!(
            cast.decrement(&entity, "price", "0.34").unwrap(),
            Some(Money::new(1200, currency("USD")))
        );
    }

    #[test]
    fn test_increment_absent_value_is_none() {
        let entity = MemoryEntity::new().with_attribute("currency", "USD");

        assert_eq!(MoneyCast::default().increment(&entity, "price", "5").unwrap(), None);
        assert_eq!(MoneyCast::default().decrement(&entity, "price", "5").unwrap(), None);
    }
}
