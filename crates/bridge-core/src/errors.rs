//! Error types for the bridge amount utilities

use thiserror::Error;

/// Top-level errors across the workspace
#[derive(Debug, Error)]
pub enum Error {
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by amount conversion and formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid decimals: {message}")]
    InvalidDecimals { message: String },

    #[error("Invalid format policy: {message}")]
    InvalidPolicy { message: String },

    #[error("Amount has {fraction_digits} fraction digits, token supports {decimals}")]
    ExcessPrecision { fraction_digits: u32, decimals: u8 },
}

/// Result type alias for workspace operations
pub type Result<T> = std::result::Result<T, Error>;

impl AmountError {
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    pub fn invalid_decimals(message: impl Into<String>) -> Self {
        Self::InvalidDecimals {
            message: message.into(),
        }
    }

    pub fn invalid_policy(message: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            message: message.into(),
        }
    }

    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidDecimals { .. } => "invalid_decimals",
            Self::InvalidPolicy { .. } => "invalid_policy",
            Self::ExcessPrecision { .. } => "excess_precision",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount { .. }
            | Self::InvalidDecimals { .. }
            | Self::InvalidPolicy { .. } => 400,
            Self::ExcessPrecision { .. } => 422,
        }
    }
}
