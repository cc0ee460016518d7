//! Base-unit conversion
//!
//! `to_base_units` scales a human amount up by `10^decimals` into an integer,
//! `from_base_units` scales an integer back down into a plain decimal string.

use bridge_core::{AmountError, Decimals};
use num_bigint::BigUint;

use crate::amount::{DecimalAmount, ToDecimalAmount};

/// `amount * 10^decimals`, fraction digits beyond token precision truncated
pub fn to_base_units<A>(amount: &A, decimals: Decimals) -> Result<BigUint, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    let amount = amount.to_decimal_amount()?;
    if amount.scale() > decimals.as_u32() {
        tracing::debug!(
            "Truncating {} to {} fraction digits for base-unit conversion",
            amount,
            decimals
        );
    }
    Ok(amount.shift_left(decimals.as_u32()).trunc())
}

/// Like `to_base_units`, but refuses to discard precision
pub fn to_base_units_exact<A>(amount: &A, decimals: Decimals) -> Result<BigUint, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    let amount = amount.to_decimal_amount()?;
    if amount.scale() > decimals.as_u32() {
        return Err(AmountError::ExcessPrecision {
            fraction_digits: amount.scale(),
            decimals: decimals.as_u8(),
        });
    }
    Ok(amount.shift_left(decimals.as_u32()).trunc())
}

/// `amount / 10^decimals` as a plain decimal string (no grouping, no exponent)
pub fn from_base_units(amount: &BigUint, decimals: Decimals) -> String {
    if decimals.is_zero() {
        return amount.to_string();
    }
    DecimalAmount::from(amount.clone())
        .shift_right(decimals.as_u32())
        .to_string()
}

/// Parse an integer base-unit amount
///
/// Only plain ASCII digits are accepted: no sign, whitespace, fraction,
/// exponent or `_` separators.
pub fn parse_base_units(amount: &str) -> Result<BigUint, AmountError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::invalid_amount(format!(
            "'{}' is not an integer base-unit amount",
            amount
        )));
    }
    BigUint::parse_bytes(amount.as_bytes(), 10).ok_or_else(|| {
        AmountError::invalid_amount(format!("'{}' is not an integer base-unit amount", amount))
    })
}

/// String form of `from_base_units`
///
/// With zero decimals the input is validated and handed back untouched.
pub fn div_decimals(amount: &str, decimals: Decimals) -> Result<String, AmountError> {
    let parsed = DecimalAmount::parse(amount)?;
    if decimals.is_zero() {
        return Ok(amount.to_string());
    }
    Ok(parsed.shift_right(decimals.as_u32()).to_string())
}

/// String form of `to_base_units` taking textual decimals, as read from token metadata
pub fn value_to_decimals(value: &str, decimals: &str) -> Result<String, AmountError> {
    let decimals: Decimals = decimals.parse()?;
    to_base_units(value, decimals).map(|units| units.to_string())
}

/// Whole ETH-like units from wei
pub fn from_wei(amount: &BigUint) -> String {
    from_base_units(amount, Decimals::ETHER)
}
