//! Data Transfer Objects for API requests and responses
//!
//! Amounts cross the wire as strings. Plain JSON numbers are still accepted
//! for amounts and decimals; serde_json's `arbitrary_precision` keeps their
//! literal text, so no value goes through `f64` on the way in.

use bridge_amounts::{AmountError, DecimalAmount, Decimals, FormatPolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "bridge-amounts";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

impl From<&AmountError> for ApiError {
    fn from(err: &AmountError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

/// Parse a JSON string or number as a decimal amount
pub fn amount_from_value(value: &Value) -> Result<DecimalAmount, AmountError> {
    match value {
        Value::String(s) => DecimalAmount::parse(s),
        Value::Number(n) => DecimalAmount::parse(&n.to_string()),
        Value::Null => Err(AmountError::invalid_amount("missing amount")),
        other => Err(AmountError::invalid_amount(format!(
            "{} is not a decimal amount",
            other
        ))),
    }
}

/// Parse a JSON string or integer as token decimals
pub fn decimals_from_value(value: &Value) -> Result<Decimals, AmountError> {
    match value {
        Value::String(s) => s.parse(),
        Value::Number(n) => match (n.as_u64(), n.as_i64()) {
            (Some(u), _) => Decimals::try_from(u),
            (None, Some(i)) => Decimals::try_from(i),
            _ => Err(AmountError::invalid_decimals(format!(
                "{} is not an integer",
                n
            ))),
        },
        Value::Null => Err(AmountError::invalid_decimals("missing value")),
        other => Err(AmountError::invalid_decimals(format!(
            "{} is not an integer",
            other
        ))),
    }
}

/// Convert a human amount into base units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToBaseUnitsRequest {
    /// Human-readable amount, e.g. "1.5"
    #[serde(default)]
    pub amount: Value,
    /// Token decimals, e.g. 18
    #[serde(default)]
    pub decimals: Value,
    /// Fail instead of truncating digits beyond token precision
    #[serde(default)]
    pub exact: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToBaseUnitsResponse {
    /// Integer base units as a decimal string
    pub base_units: String,
}

/// Convert base units into a human amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FromBaseUnitsRequest {
    /// Base units, e.g. "1500000000000000000"
    #[serde(default)]
    pub amount: Value,
    /// Token decimals, e.g. 18
    #[serde(default)]
    pub decimals: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountResponse {
    pub amount: String,
}

/// Format a value for display
///
/// An explicit `policy` wins over a named `preset`; with neither the
/// `balance` preset applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub policy: Option<FormatPolicy>,
    #[serde(default)]
    pub preset: Option<String>,
    /// Optional currency symbol appended after a space
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted: String,
}

/// Truncate to a fixed number of fraction digits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruncateRequest {
    #[serde(default)]
    pub value: Value,
    pub fraction_digits: u32,
}

/// Shorten an address or hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierRequest {
    #[serde(default)]
    pub identifier: Option<String>,
    /// Defaults to the configured edge length
    #[serde(default)]
    pub edge_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueResponse {
    pub value: String,
}

/// Liquidity pool share request, all values in whole tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolShareRequest {
    #[serde(default)]
    pub lp_balance: Value,
    #[serde(default)]
    pub lp_total_supply: Value,
    #[serde(default)]
    pub reserve_a: Value,
    #[serde(default)]
    pub reserve_b: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_from_value() {
        assert_eq!(
            amount_from_value(&json!("1.5")).unwrap().to_string(),
            "1.5"
        );
        assert_eq!(
            amount_from_value(&json!(18446744073709551615u64))
                .unwrap()
                .to_string(),
            "18446744073709551615"
        );
        assert_eq!(amount_from_value(&json!(0.25)).unwrap().to_string(), "0.25");
        assert!(amount_from_value(&json!(-5)).is_err());
        assert!(amount_from_value(&json!(-0.5)).is_err());
    }

    #[test]
    fn test_amount_from_large_json_numbers() {
        let integer: Value = serde_json::from_str("100000000000000000000000000001").unwrap();
        assert_eq!(
            amount_from_value(&integer).unwrap().to_string(),
            "100000000000000000000000000001"
        );

        let fraction: Value = serde_json::from_str("12345678901234567890.123456789").unwrap();
        assert_eq!(
            amount_from_value(&fraction).unwrap().to_string(),
            "12345678901234567890.123456789"
        );

        let exponent: Value = serde_json::from_str("1.5e3").unwrap();
        assert_eq!(amount_from_value(&exponent).unwrap().to_string(), "1500");
        assert!(amount_from_value(&Value::Null).is_err());
        assert!(amount_from_value(&json!(true)).is_err());
    }

    #[test]
    fn test_decimals_from_value() {
        assert_eq!(decimals_from_value(&json!(18)).unwrap(), Decimals::ETHER);
        assert_eq!(decimals_from_value(&json!("6")).unwrap(), Decimals::SCRT);
        for bad in [json!(-1), json!(1.5), json!("x"), Value::Null, json!(256)] {
            let err = decimals_from_value(&bad).unwrap_err();
            assert_eq!(err.error_code(), "invalid_decimals", "input {}", bad);
        }
    }
}
