//! castable_money Library
//!
//! Casts binding a `Money` value to an entity attribute, with the currency
//! stored next to the amount, on a related entity, or fixed.

pub mod casts;
pub mod config;
pub mod deviator;
pub mod domain;
pub mod entity;
mod error;
pub mod serializer;

pub use casts::{AttributeCast, CurrencyCast, MoneyCast, NumericCurrencyTable, SetOutcome};
pub use config::{Config, ConfigError};
pub use deviator::{Deviator, MoneyDeviator};
pub use domain::{Currency, Money, MoneyRecord, Value};
pub use entity::{Entity, MemoryEntity};
pub use error::{CastError, CastResult};
pub use serializer::MoneySerializer;
