//! Deviators
//!
//! Apply an increment or decrement delta to a detached value.

use crate::domain::{Money, Value};
use crate::error::{CastError, CastResult};
use crate::serializer::MoneySerializer;

/// Arithmetic mutation of a value by a raw numeric delta.
pub trait Deviator {
    type Output;

    fn increment(&self, operand: &Value, delta: &str) -> CastResult<Self::Output>;

    fn decrement(&self, operand: &Value, delta: &str) -> CastResult<Self::Output>;
}

/// Money deviator.
///
/// The delta carries no currency of its own; it is read through the
/// serializer in the operand's currency.
///
/// # Example
/// ```
/// use castable_money::domain::{Currency, Money, Value};
/// use castable_money::{Deviator, MoneyDeviator, MoneySerializer};
///
/// let usd = Currency::new("USD").unwrap();
/// let deviator = MoneyDeviator::new(MoneySerializer::Decimal);
/// let total = deviator.increment(&Value::Money(Money::new(100, usd)), "1.50").unwrap();
/// assert_eq!(total, Money::new(250, usd));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyDeviator {
    serializer: MoneySerializer,
}

impl MoneyDeviator {
    pub fn new(serializer: MoneySerializer) -> Self {
        Self { serializer }
    }

    pub fn serializer(&self) -> MoneySerializer {
        self.serializer
    }

    /// Add a delta to money
    pub fn add(&self, operand: &Money, delta: &str) -> CastResult<Money> {
        operand.try_add(&self.delta(operand, delta)?)
    }

    /// Subtract a delta from money
    pub fn subtract(&self, operand: &Money, delta: &str) -> CastResult<Money> {
        operand.try_sub(&self.delta(operand, delta)?)
    }

    fn delta(&self, operand: &Money, delta: &str) -> CastResult<Money> {
        self.serializer
            .deserialize(&Value::from(delta), Some(operand.currency()))
    }
}

impl Deviator for MoneyDeviator {
    type Output = Money;

    fn increment(&self, operand: &Value, delta: &str) -> CastResult<Money> {
        let money = operand
            .as_money()
            .ok_or_else(|| CastError::invalid_type("money", operand))?;
        self.add(money, delta)
    }

    fn decrement(&self, operand: &Value, delta: &str) -> CastResult<Money> {
        let money = operand
            .as_money()
            .ok_or_else(|| CastError::invalid_type("money", operand))?;
        self.subtract(money, delta)
    }
}
