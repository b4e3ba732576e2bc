//! Attribute casts
//!
//! Bidirectional transformations between persisted raw attribute values and
//! rich in-memory values, invoked by the entity framework.

pub mod currency;
mod guard;
pub mod money;
pub mod numeric;

pub use currency::CurrencyCast;
pub use money::MoneyCast;
pub use numeric::NumericCurrencyTable;

use std::collections::BTreeMap;

use crate::domain::Value;
use crate::entity::Entity;
use crate::error::CastResult;

/// Result of a cast write.
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    /// Store nothing at the key
    Absent,
    /// Store a single raw value at the key
    Value(Value),
    /// Store several attributes together
    Attributes(BTreeMap<String, Value>),
    /// Re-entrant write; leave the entity untouched
    Skipped,
}

impl SetOutcome {
    /// Raw value for the written key, if the outcome stores one
    pub fn value_for(&self, key: &str) -> Option<&Value> {
        match self {
            SetOutcome::Value(value) => Some(value),
            SetOutcome::Attributes(values) => values.get(key),
            SetOutcome::Absent | SetOutcome::Skipped => None,
        }
    }
}

/// Cast contract exposed to the entity framework.
pub trait AttributeCast {
    /// Materialize a raw stored value
    fn get(&self, entity: &dyn Entity, key: &str, raw: Option<&Value>) -> CastResult<Option<Value>>;

    /// Turn an assigned value into what should be stored
    fn set(&self, entity: &mut dyn Entity, key: &str, value: Option<Value>) -> CastResult<SetOutcome>;

    /// External (display/transport) form of a cast value
    fn serialize(
        &self,
        entity: &dyn Entity,
        key: &str,
        value: Option<&Value>,
    ) -> CastResult<Option<serde_json::Value>>;
}
