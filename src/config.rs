//! Configuration module
//!
//! Loads cast configuration from environment variables.

use std::env;

use crate::casts::money::DEFAULT_CURRENCY_ATTRIBUTE;
use crate::casts::MoneyCast;
use crate::error::CastError;
use crate::serializer::MoneySerializer;

/// Cast configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Attribute path holding the currency of money attributes
    pub currency_attribute: String,

    /// Amount encoding strategy, resolved at load time
    pub serializer: MoneySerializer,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_attribute = lookup("MONEY_CURRENCY_ATTRIBUTE")
            .unwrap_or_else(|| DEFAULT_CURRENCY_ATTRIBUTE.to_string());

        if currency_attribute.trim().is_empty() {
            return Err(ConfigError::InvalidValue("MONEY_CURRENCY_ATTRIBUTE"));
        }

        let serializer = match lookup("MONEY_SERIALIZER") {
            Some(name) => MoneySerializer::resolve(&name)?,
            None => MoneySerializer::default(),
        };

        Ok(Self {
            currency_attribute: currency_attribute.trim().to_string(),
            serializer,
        })
    }

    /// Build the configured money cast
    pub fn money_cast(&self) -> MoneyCast {
        MoneyCast::with_serializer(self.currency_attribute.clone(), self.serializer)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_attribute: DEFAULT_CURRENCY_ATTRIBUTE.to_string(),
            serializer: MoneySerializer::default(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid MONEY_SERIALIZER: {0}")]
    Serializer(#[from] CastError),
}
