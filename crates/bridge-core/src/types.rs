//! Core type definitions for the bridge amount utilities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AmountError;

/// Token decimal exponent (ERC-20 `decimals`): base units per whole token is `10^decimals`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimals(u8);

impl Decimals {
    /// Whole-unit tokens
    pub const ZERO: Self = Self(0);

    /// ETH and most ERC-20 tokens
    pub const ETHER: Self = Self(18);

    /// SCRT and most Secret Network SNIP-20 tokens
    pub const SCRT: Self = Self(6);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    pub const fn as_u32(&self) -> u32 {
        self.0 as u32
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Decimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Decimals {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(AmountError::invalid_decimals(format!(
                "{} is negative",
                value
            )));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| AmountError::invalid_decimals(format!("{} exceeds {}", value, u8::MAX)))
    }
}

impl TryFrom<u64> for Decimals {
    type Error = AmountError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| AmountError::invalid_decimals(format!("{} exceeds {}", value, u8::MAX)))
    }
}

impl FromStr for Decimals {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::invalid_decimals("missing value"));
        }
        if let Some(rest) = s.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountError::invalid_decimals(format!("{} is negative", s)));
            }
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::invalid_decimals(format!(
                "'{}' is not a non-negative integer",
                s
            )));
        }
        s.parse::<u64>()
            .map_err(|_| AmountError::invalid_decimals(format!("{} exceeds {}", s, u8::MAX)))
            .and_then(Self::try_from)
    }
}

/// Upper bound on fraction digits a display policy may request
pub const MAX_FRACTION_DIGITS: u8 = 100;

/// How a decimal amount is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPolicy {
    /// Pad with zeros up to this many fraction digits
    #[serde(default)]
    pub min_fraction_digits: u8,

    /// Round to at most this many fraction digits
    pub max_fraction_digits: u8,

    /// Insert `,` between thousands
    #[serde(default = "default_use_grouping")]
    pub use_grouping: bool,
}

fn default_use_grouping() -> bool {
    true
}

impl FormatPolicy {
    /// Whole units only
    pub const ZERO_DECIMALS: Self = Self::preset(0, 0, true);

    /// Currency-like display
    pub const TWO_DECIMALS: Self = Self::preset(0, 2, true);

    /// Token amount display
    pub const SIX_DECIMALS: Self = Self::preset(0, 6, true);

    /// Exchange rate display
    pub const PRICE: Self = Self::preset(0, 10, true);

    /// Wallet balance display
    pub const BALANCE: Self = Self::preset(0, 6, true);

    /// Form input values, no grouping so the result can be parsed back
    pub const INPUT: Self = Self::preset(0, 20, false);

    const fn preset(min_fraction_digits: u8, max_fraction_digits: u8, use_grouping: bool) -> Self {
        Self {
            min_fraction_digits,
            max_fraction_digits,
            use_grouping,
        }
    }

    /// Build a validated policy
    pub fn new(
        min_fraction_digits: u8,
        max_fraction_digits: u8,
        use_grouping: bool,
    ) -> Result<Self, AmountError> {
        let policy = Self::preset(min_fraction_digits, max_fraction_digits, use_grouping);
        policy.validate()?;
        Ok(policy)
    }

    /// Check the digit bounds (deserialized policies skip `new`)
    pub fn validate(&self) -> Result<(), AmountError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(AmountError::invalid_policy(format!(
                "max_fraction_digits {} exceeds {}",
                self.max_fraction_digits, MAX_FRACTION_DIGITS
            )));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(AmountError::invalid_policy(format!(
                "min_fraction_digits {} exceeds max_fraction_digits {}",
                self.min_fraction_digits, self.max_fraction_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals_from_str() {
        assert_eq!("18".parse::<Decimals>().unwrap(), Decimals::ETHER);
        assert_eq!(" 6 ".parse::<Decimals>().unwrap(), Decimals::SCRT);
        assert_eq!("0".parse::<Decimals>().unwrap(), Decimals::ZERO);
    }

    #[test]
    fn test_decimals_rejects_invalid() {
        for input in ["", "-1", "1.5", "abc", "256", "99999999999999999999999"] {
            let err = input.parse::<Decimals>().unwrap_err();
            assert_eq!(err.error_code(), "invalid_decimals", "input {:?}", input);
        }
    }

    #[test]
    fn test_decimals_try_from_integers() {
        assert_eq!(Decimals::try_from(8i64).unwrap().as_u8(), 8);
        assert!(Decimals::try_from(-1i64).is_err());
        assert!(Decimals::try_from(300u64).is_err());
    }

    #[test]
    fn test_policy_validation() {
        assert!(FormatPolicy::new(2, 6, true).is_ok());
        assert!(FormatPolicy::new(7, 6, true).is_err());
        assert!(FormatPolicy::new(0, 101, false).is_err());
        for preset in [
            FormatPolicy::ZERO_DECIMALS,
            FormatPolicy::TWO_DECIMALS,
            FormatPolicy::SIX_DECIMALS,
            FormatPolicy::PRICE,
            FormatPolicy::BALANCE,
            FormatPolicy::INPUT,
        ] {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_policy_deserialize_defaults() {
        let policy: FormatPolicy = serde_json::from_str(r#"{"max_fraction_digits": 4}"#).unwrap();
        assert_eq!(policy.min_fraction_digits, 0);
        assert_eq!(policy.max_fraction_digits, 4);
        assert!(policy.use_grouping);
    }
}
