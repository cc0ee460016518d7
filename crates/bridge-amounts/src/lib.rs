//! Token Amount Conversion and Formatting
//!
//! Converts between human-entered token amounts and the integer base units
//! used on-chain, and renders amounts for display.
//!
//! # Units
//!
//! - Decimal amounts: exact non-negative decimals (`DecimalAmount`)
//! - Base units: arbitrary-precision integers (`BigUint`), e.g. wei
//! - `decimals`: base units per whole token is `10^decimals`
//!
//! No binary floating point is involved in any conversion. `f64` inputs are
//! turned into their shortest decimal text before parsing.
//!
//! # Example
//!
//! ```
//! use bridge_amounts::{from_base_units, to_base_units, Decimals};
//!
//! let wei = to_base_units("1.5", Decimals::ETHER).unwrap();
//! assert_eq!(wei.to_string(), "1500000000000000000");
//! assert_eq!(from_base_units(&wei, Decimals::ETHER), "1.5");
//! ```

pub mod amount;
pub mod convert;
pub mod format;
pub mod identifier;
pub mod pool;

pub use amount::{DecimalAmount, ToDecimalAmount, MAX_SIGNIFICANT_DIGITS};
pub use convert::{
    div_decimals, from_base_units, from_wei, parse_base_units, to_base_units,
    to_base_units_exact, value_to_decimals,
};
pub use format::{
    format, format_currency, format_str, format_with_six_decimals, format_with_two_decimals,
    format_zero_decimals, truncate_fixed, truncate_fixed_str,
};
pub use identifier::{truncate_middle, DEFAULT_EDGE_LENGTH};
pub use pool::PoolShare;

pub use bridge_core::{AmountError, Decimals, FormatPolicy};
pub use num_bigint::BigUint;
