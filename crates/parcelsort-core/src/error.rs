//! Error types for ParcelSort

use crate::types::Field;

/// Result type alias using ParcelSort's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ParcelSort operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input was not a real number
    #[error("{field} must be a number, got {actual}")]
    TypeMismatch {
        /// Offending field
        field: Field,
        /// Name of the type that was supplied instead
        actual: String,
    },

    /// An input was below zero
    #[error("{field} cannot be negative, got {value}")]
    NegativeValue {
        /// Offending field
        field: Field,
        /// The rejected value
        value: f64,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new type mismatch error
    pub fn type_mismatch(field: Field, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field,
            actual: actual.into(),
        }
    }

    /// Create a new negative value error
    pub fn negative_value(field: Field, value: f64) -> Self {
        Self::NegativeValue { field, value }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Field that failed validation, if this is an input error
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::TypeMismatch { field, .. } | Self::NegativeValue { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Whether this error was raised by input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::NegativeValue { .. })
    }
}
