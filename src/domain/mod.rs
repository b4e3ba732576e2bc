//! Domain module
//!
//! Value types shared by the casts: decimal amounts, currency, money, the
//! ISO reference table and the dynamic attribute value.

pub mod amount;
pub mod currency;
pub mod iso;
pub mod money;
pub mod value;

pub use amount::DecimalAmount;
pub use currency::Currency;
pub use iso::{IsoCurrency, ISO_4217};
pub use money::{Money, MoneyRecord};
pub use value::Value;
