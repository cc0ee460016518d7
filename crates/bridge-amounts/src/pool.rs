//! Liquidity pool share math
//!
//! A holder of `lp_balance` LP tokens out of `lp_total_supply` owns the same
//! fraction of each pool reserve.

use bridge_core::AmountError;
use serde::Serialize;

use crate::amount::DecimalAmount;

/// Fraction digits kept for pooled token amounts
pub const POOLED_FRACTION_DIGITS: u32 = 6;

/// Fraction digits kept for the share percentage
pub const SHARE_FRACTION_DIGITS: u32 = 2;

/// A holder's slice of a two-sided pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolShare {
    /// Amount of token A backing the holder's LP tokens
    #[serde(serialize_with = "serialize_display")]
    pub pooled_a: DecimalAmount,
    /// Amount of token B backing the holder's LP tokens
    #[serde(serialize_with = "serialize_display")]
    pub pooled_b: DecimalAmount,
    /// Holder's share of the pool (e.g., 12.5 means 12.5%)
    #[serde(serialize_with = "serialize_display")]
    pub share_pct: DecimalAmount,
}

fn serialize_display<S>(value: &DecimalAmount, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

impl PoolShare {
    /// Compute a holder's pooled amounts and share
    ///
    /// An empty pool (zero total supply) yields zeros.
    pub fn compute(
        lp_balance: &DecimalAmount,
        lp_total_supply: &DecimalAmount,
        reserve_a: &DecimalAmount,
        reserve_b: &DecimalAmount,
    ) -> Result<Self, AmountError> {
        if lp_total_supply.is_zero() {
            return Ok(Self {
                pooled_a: DecimalAmount::zero(),
                pooled_b: DecimalAmount::zero(),
                share_pct: DecimalAmount::zero(),
            });
        }
        if lp_balance > lp_total_supply {
            return Err(AmountError::invalid_amount(format!(
                "LP balance {} exceeds total supply {}",
                lp_balance, lp_total_supply
            )));
        }

        let pooled = |reserve: &DecimalAmount| {
            lp_balance
                .multiply(reserve)
                .div_rounded(lp_total_supply, POOLED_FRACTION_DIGITS)
                .unwrap_or_default()
        };
        let share_pct = lp_balance
            .multiply(&DecimalAmount::from(100u64))
            .div_rounded(lp_total_supply, SHARE_FRACTION_DIGITS)
            .unwrap_or_default();

        Ok(Self {
            pooled_a: pooled(reserve_a),
            pooled_b: pooled(reserve_b),
            share_pct,
        })
    }
}
