//! Exact non-negative decimal amounts
//!
//! `DecimalAmount` wraps a `BigDecimal` and only ever holds values that came
//! through the validated constructors below, so it is never negative. Scaling
//! by powers of ten moves the decimal exponent and never touches the digits.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use bridge_core::AmountError;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// Largest exponent accepted in `1e<exp>` notation
const MAX_EXPONENT: i64 = 4096;

/// Most significant digits a parsed amount may carry
pub const MAX_SIGNIFICANT_DIGITS: usize = 4096;

/// `10^exp` as a big integer
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Round `numerator / denominator` half away from zero
fn div_round_half_up(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if &remainder + &remainder >= *denominator {
        quotient + 1u32
    } else {
        quotient
    }
}

/// Exact non-negative decimal value
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DecimalAmount(BigDecimal);

impl DecimalAmount {
    /// Build `coefficient / 10^scale`
    pub fn new(coefficient: BigUint, scale: u32) -> Self {
        Self(BigDecimal::new(BigInt::from(coefficient), i64::from(scale)))
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of significant fraction digits
    pub fn scale(&self) -> u32 {
        self.split_digits().1.len() as u32
    }

    /// Parse a human-entered amount
    ///
    /// Accepts `12`, `12.5`, `.5`, `5.`, `+3`, `1e18`, `2.5E-3`, with
    /// surrounding whitespace. Rejects signs other than `+`, grouping
    /// separators, and NaN/Infinity.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountError::invalid_amount("empty input"));
        }
        if trimmed.starts_with('-') {
            return Err(AmountError::invalid_amount(format!(
                "'{}' is negative",
                trimmed
            )));
        }
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
        {
            return Err(AmountError::invalid_amount(format!(
                "'{}' is not a decimal number",
                trimmed
            )));
        }

        let exponent = match exponent {
            Some(exp) => exp
                .parse::<i64>()
                .ok()
                .filter(|e| e.abs() <= MAX_EXPONENT)
                .ok_or_else(|| {
                    AmountError::invalid_amount(format!("'{}' has an invalid exponent", trimmed))
                })?,
            None => 0,
        };

        // Zeros that cannot change the value are dropped as text, before any
        // big-integer work
        let int_part = int_part.trim_start_matches('0');
        let frac_part = frac_part.trim_end_matches('0');
        if int_part.len() + frac_part.len() > MAX_SIGNIFICANT_DIGITS {
            return Err(AmountError::invalid_amount(format!(
                "amount has more than {} significant digits",
                MAX_SIGNIFICANT_DIGITS
            )));
        }

        let digits = format!("{}{}", int_part, frac_part);
        if digits.bytes().all(|b| b == b'0') {
            return Ok(Self::zero());
        }
        let coefficient = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
            AmountError::invalid_amount(format!("'{}' is not a decimal number", trimmed))
        })?;

        let scale = frac_part.len() as i64 - exponent;
        Ok(Self(BigDecimal::new(BigInt::from(coefficient), scale)))
    }

    /// Parse a display string, dropping `,` grouping separators
    pub fn parse_display(input: &str) -> Result<Self, AmountError> {
        let stripped: String = input.chars().filter(|c| *c != ',').collect();
        Self::parse(&stripped)
    }

    /// Convert a float through its shortest decimal text
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::invalid_amount(format!("{} is not finite", value)));
        }
        if value < 0.0 {
            return Err(AmountError::invalid_amount(format!("{} is negative", value)));
        }
        // Display for f64 never uses exponent notation
        Self::parse(&format!("{}", value.abs()))
    }

    /// Multiply by `10^places`
    pub fn shift_left(&self, places: u32) -> Self {
        let (coefficient, scale) = self.0.as_bigint_and_exponent();
        Self(BigDecimal::new(coefficient, scale - i64::from(places)))
    }

    /// Divide by `10^places`
    pub fn shift_right(&self, places: u32) -> Self {
        let (coefficient, scale) = self.0.as_bigint_and_exponent();
        Self(BigDecimal::new(coefficient, scale + i64::from(places)))
    }

    /// Integer part, fraction discarded
    pub fn trunc(&self) -> BigUint {
        let (coefficient, _) = self
            .0
            .with_scale_round(0, RoundingMode::Down)
            .into_bigint_and_exponent();
        coefficient.magnitude().clone()
    }

    /// Drop fraction digits beyond `fraction_digits` without rounding
    pub fn truncate_to(&self, fraction_digits: u32) -> Self {
        if self.scale() <= fraction_digits {
            return self.clone();
        }
        Self(
            self.0
                .with_scale_round(i64::from(fraction_digits), RoundingMode::Down),
        )
    }

    /// Round half away from zero to at most `fraction_digits`
    pub fn round_to(&self, fraction_digits: u32) -> Self {
        if self.scale() <= fraction_digits {
            return self.clone();
        }
        Self(
            self.0
                .with_scale_round(i64::from(fraction_digits), RoundingMode::HalfUp),
        )
    }

    /// Exact product
    pub fn multiply(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    /// Quotient rounded half away from zero to `fraction_digits`
    ///
    /// `None` on division by zero.
    pub fn div_rounded(&self, divisor: &Self, fraction_digits: u32) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let (c1, s1) = self.0.as_bigint_and_exponent();
        let (c2, s2) = divisor.0.as_bigint_and_exponent();
        let mut numerator = c1.magnitude().clone();
        let mut denominator = c2.magnitude().clone();

        // (c1 / 10^s1) / (c2 / 10^s2) * 10^k = c1 * 10^(s2 + k - s1) / c2
        let shift = s2 + i64::from(fraction_digits) - s1;
        let places = u32::try_from(shift.unsigned_abs()).ok()?;
        if shift >= 0 {
            numerator *= pow10(places);
        } else {
            denominator *= pow10(places);
        }
        Some(Self::new(
            div_round_half_up(&numerator, &denominator),
            fraction_digits,
        ))
    }

    /// Integer digits and fraction digits as plain strings
    ///
    /// The fraction has exactly `scale()` digits and is empty for integers.
    pub fn split_digits(&self) -> (String, String) {
        let (coefficient, scale) = self.0.as_bigint_and_exponent();
        let digits = coefficient.magnitude().to_str_radix(10);
        if scale <= 0 {
            if coefficient.is_zero() {
                return (digits, String::new());
            }
            let zeros = "0".repeat(scale.unsigned_abs() as usize);
            return (digits + &zeros, String::new());
        }

        let scale = scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        (
            int_part.to_string(),
            frac_part.trim_end_matches('0').to_string(),
        )
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.split_digits();
        if frac_part.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

impl FromStr for DecimalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BigUint> for DecimalAmount {
    fn from(value: BigUint) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for DecimalAmount {
    fn from(value: u64) -> Self {
        Self::new(BigUint::from(value), 0)
    }
}

/// Anything a caller may hand in as an amount: text, floats, or parsed values
pub trait ToDecimalAmount {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError>;

    /// Like `to_decimal_amount`, but text may carry `,` grouping separators
    fn to_display_amount(&self) -> Result<DecimalAmount, AmountError> {
        self.to_decimal_amount()
    }
}

impl ToDecimalAmount for str {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        DecimalAmount::parse(self)
    }

    fn to_display_amount(&self) -> Result<DecimalAmount, AmountError> {
        DecimalAmount::parse_display(self)
    }
}

impl ToDecimalAmount for String {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        DecimalAmount::parse(self)
    }

    fn to_display_amount(&self) -> Result<DecimalAmount, AmountError> {
        DecimalAmount::parse_display(self)
    }
}

impl ToDecimalAmount for f64 {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        DecimalAmount::from_f64(*self)
    }
}

impl ToDecimalAmount for u64 {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        Ok(DecimalAmount::from(*self))
    }
}

impl ToDecimalAmount for BigUint {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        Ok(DecimalAmount::from(self.clone()))
    }
}

impl ToDecimalAmount for DecimalAmount {
    fn to_decimal_amount(&self) -> Result<DecimalAmount, AmountError> {
        Ok(self.clone())
    }
}
