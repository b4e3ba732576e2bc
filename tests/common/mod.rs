//! Common test utilities

#![allow(dead_code)]

use castable_money::domain::{Currency, Money, Value};
use castable_money::{
    AttributeCast, CastResult, CurrencyCast, Entity, MemoryEntity, MoneyCast, SetOutcome,
};

pub fn currency(code: &str) -> Currency {
    Currency::new(code).expect("valid currency code")
}

pub fn money(amount: i64, code: &str) -> Money {
    Money::new(amount, currency(code))
}

/// Entity whose currency cast re-derives the money attribute on assignment,
/// re-entering the money cast for the same entity mid-write.
pub struct ReentrantEntity {
    pub inner: MemoryEntity,
    pub cast: MoneyCast,
    pub amount_key: String,
    pub replay: Option<Money>,
    pub currency_writes: usize,
    pub nested_outcomes: Vec<SetOutcome>,
}

impl ReentrantEntity {
    pub fn new(cast: MoneyCast, amount_key: &str) -> Self {
        Self {
            inner: MemoryEntity::new().with_currency_cast(cast.currency_attribute(), CurrencyCast::Alphabetic),
            cast,
            amount_key: amount_key.to_string(),
            replay: None,
            currency_writes: 0,
            nested_outcomes: Vec::new(),
        }
    }

    /// Assign money the way the framework would, remembering it for replay
    pub fn assign(&mut self, value: Money) -> CastResult<SetOutcome> {
        self.replay = Some(value.clone());
        let cast = self.cast.clone();
        let key = self.amount_key.clone();
        let outcome = cast.set(self, &key, Some(Value::Money(value)))?;
        if let Some(raw) = outcome.value_for(&key) {
            self.inner.set_value(&key, raw.clone())?;
        }
        Ok(outcome)
    }
}

impl Entity for ReentrantEntity {
    fn has_value(&self, key: &str) -> bool {
        self.inner.has_value(key)
    }

    fn get_value(&self, path: &str) -> CastResult<Option<Value>> {
        self.inner.get_value(path)
    }

    fn set_value(&mut self, key: &str, value: Value) -> CastResult<()> {
        self.inner.set_value(key, value)?;

        if key == self.cast.currency_attribute() {
            self.currency_writes += 1;
            // Re-derive the money attribute, as a framework syncing casts would
            if let Some(replay) = self.replay.clone() {
                let cast = self.cast.clone();
                let amount_key = self.amount_key.clone();
                let outcome = cast.set(self, &amount_key, Some(Value::Money(replay)))?;
                self.nested_outcomes.push(outcome);
            }
        }
        Ok(())
    }

    fn is_writable_cast(&self, key: &str) -> bool {
        self.inner.is_writable_cast(key)
    }

    fn is_public_immutable_field(&self, key: &str) -> bool {
        self.inner.is_public_immutable_field(key)
    }

    fn has_read_derivation(&self, key: &str) -> bool {
        self.inner.has_read_derivation(key)
    }
}
