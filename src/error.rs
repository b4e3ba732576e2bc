//! Error handling module
//!
//! Centralized error type for casts, serializers and deviators.

use thiserror::Error;

use crate::domain::{Currency, Value};

/// Crate-wide Result type
pub type CastResult<T> = Result<T, CastError>;

/// Cast errors
///
/// Every variant is a local validation failure. Absent values are never
/// reported through this type; they travel as `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CastError {
    /// A write or serialize received the wrong kind of value
    #[error("Invalid value type: expected {expected}, got {found}")]
    InvalidValueType {
        expected: &'static str,
        found: &'static str,
    },

    /// Money currency differs from the fixed currency it must conform to
    #[error("Currency mismatch: {required} required, {provided} provided")]
    CurrencyMismatch {
        required: Currency,
        provided: Currency,
    },

    /// Amount-only raw value with no currency to interpret it in
    #[error("Missing fallback currency for {strategy} deserialization")]
    MissingFallbackCurrency { strategy: &'static str },

    #[error("Unknown currency code: {0}")]
    UnknownCurrencyCode(String),

    /// Configured serializer strategy could not be constructed
    #[error("Cannot resolve serializer: {0}")]
    SerializerResolution(String),

    /// Fixed currency path resolved to nothing
    #[error("Currency could not be resolved from \"{0}\"")]
    UnresolvedCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl CastError {
    /// Create an invalid value type error for the given value
    pub fn invalid_type(expected: &'static str, found: &Value) -> Self {
        Self::InvalidValueType {
            expected,
            found: found.kind(),
        }
    }

    /// Create a currency mismatch error
    pub fn currency_mismatch(required: Currency, provided: Currency) -> Self {
        Self::CurrencyMismatch { required, provided }
    }

    /// Check if this error was caused by the value handed in by the caller
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidValueType { .. }
                | Self::CurrencyMismatch { .. }
                | Self::InvalidAmount(_)
        )
    }
}
