//! Display formatting
//!
//! Two families of output:
//! - `truncate_fixed`: exact digit count, hard truncation, never rounds
//! - `format`: en-US display rounding (half away from zero) under a `FormatPolicy`

use bridge_core::{AmountError, FormatPolicy, MAX_FRACTION_DIGITS};

use crate::amount::{DecimalAmount, ToDecimalAmount};

/// Pad or cut `value` to exactly `fraction_digits` fraction digits
///
/// Extra digits are dropped, never rounded. Zero returns the integer part only.
/// More than `MAX_FRACTION_DIGITS` digits is `InvalidPolicy`.
pub fn truncate_fixed(
    value: &DecimalAmount,
    fraction_digits: u32,
) -> Result<String, AmountError> {
    if fraction_digits > u32::from(MAX_FRACTION_DIGITS) {
        return Err(AmountError::invalid_policy(format!(
            "fraction_digits {} exceeds {}",
            fraction_digits, MAX_FRACTION_DIGITS
        )));
    }
    let (int_part, frac_part) = value.truncate_to(fraction_digits).split_digits();
    if fraction_digits == 0 {
        return Ok(int_part);
    }
    Ok(join_fraction(int_part, frac_part, fraction_digits as usize))
}

/// `truncate_fixed` over a textual amount
pub fn truncate_fixed_str(value: &str, fraction_digits: u32) -> Result<String, AmountError> {
    truncate_fixed(&DecimalAmount::parse(value)?, fraction_digits)
}

/// Render `value` for display under `policy`
pub fn format<A>(value: &A, policy: &FormatPolicy) -> Result<String, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    policy.validate()?;
    let rounded = value
        .to_display_amount()?
        .round_to(policy.max_fraction_digits as u32);
    let (int_part, frac_part) = rounded.split_digits();

    let int_part = if policy.use_grouping {
        group_thousands(&int_part)
    } else {
        int_part
    };

    let min = policy.min_fraction_digits as usize;
    if frac_part.is_empty() && min == 0 {
        Ok(int_part)
    } else {
        Ok(join_fraction(int_part, frac_part, min))
    }
}

/// `format` over a display string
///
/// Text passed to `format` may already carry `,` grouping, so
/// `format(format(x, p), p) == format(x, p)` for every policy.
pub fn format_str(value: &str, policy: &FormatPolicy) -> Result<String, AmountError> {
    format(value, policy)
}

/// Formatted amount followed by a currency symbol, e.g. `"1,234.5 ₽"`
pub fn format_currency<A>(
    value: &A,
    policy: &FormatPolicy,
    symbol: &str,
) -> Result<String, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    Ok(format!("{} {}", format(value, policy)?, symbol))
}

pub fn format_zero_decimals<A>(value: &A) -> Result<String, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    format(value, &FormatPolicy::ZERO_DECIMALS)
}

pub fn format_with_two_decimals<A>(value: &A) -> Result<String, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    format(value, &FormatPolicy::TWO_DECIMALS)
}

pub fn format_with_six_decimals<A>(value: &A) -> Result<String, AmountError>
where
    A: ToDecimalAmount + ?Sized,
{
    format(value, &FormatPolicy::SIX_DECIMALS)
}

/// `int.frac`, right-padding the fraction with zeros to `min_width`
fn join_fraction(int_part: String, frac_part: String, min_width: usize) -> String {
    let mut joined = int_part;
    joined.push('.');
    joined.push_str(&frac_part);
    if frac_part.len() < min_width {
        joined.push_str(&"0".repeat(min_width - frac_part.len()));
    }
    joined
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
