//! Exact conversion between wei and named kappa denominations
//!
//! Amounts are held as arbitrary-precision integers of the base unit, wei.
//! Every other unit is a power of ten of wei:
//!
//! - **`kwei`** / `babbage` / `femtokappa`: 10^3
//! - **`gwei`** / `shannon` / `nanokappa` / `nano`: 10^9
//! - **`kappa`**: 10^18, the default when no unit is given
//! - **`tkappa`**: 10^30, the largest unit
//!
//! ## Features
//!
//! - **Exact**: no floating point; conversions that would lose digits fail
//! - **no_std**: only needs `alloc`
//! - **Serde support**: [`Amount`] and [`ConversionOptions`] behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use kapoio_unit::{from_wei, to_wei, BigInt, ConversionOptions};
//!
//! let wei = to_wei("1.5", Some("kappa")).unwrap();
//! assert_eq!(wei, "1500000000000000000".parse::<BigInt>().unwrap());
//!
//! let options = ConversionOptions::new().with_commify(true);
//! assert_eq!(from_wei(wei * 1000, None, options).unwrap(), "1,500");
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

extern crate alloc;

mod amount;
mod convert;
mod units;

pub use amount::{Amount, number_to_string};
pub use convert::{ConversionOptions, from_base, to_base};
pub use num_bigint::{BigInt, BigUint};
pub use units::{DEFAULT_UNIT, Denomination, UNIT_MAP, get_value_of_unit};

use alloc::string::String;

use thiserror::Error;

use crate::units::UnitNames;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unknown unit `{unit}`, expected one of: {}", UnitNames)]
    UnknownUnit { unit: String },

    #[error("invalid number value `{value}` of type {kind}, expected a number matching ^-?[0-9.]+$")]
    InvalidNumber { value: String, kind: &'static str },

    #[error("invalid amount `{amount}`")]
    InvalidAmount { amount: String },

    #[error("too many decimal points in `{amount}`")]
    TooManyDecimalPoints { amount: String },

    #[error("too many decimal places in `{amount}`: {unit} allows at most {decimals}")]
    TooManyDecimalPlaces {
        amount: String,
        unit: &'static str,
        decimals: usize,
    },

    #[error("cannot express an amount in {unit}: the unit is worth zero wei")]
    ZeroUnit { unit: &'static str },
}

pub type Result<T> = core::result::Result<T, ConversionError>;

// ============================================================================
// Wei Aliases
// ============================================================================

/// Converts a wei amount into a decimal string in `unit` (default `kappa`).
///
/// See [`from_base`].
#[inline]
pub fn from_wei<'a>(
    amount: impl Into<Amount<'a>>,
    unit: Option<&str>,
    options: ConversionOptions,
) -> Result<String> {
    from_base(amount, unit, options)
}

/// Converts a decimal amount in `unit` (default `kappa`) into wei.
///
/// See [`to_base`].
#[inline]
pub fn to_wei<'a>(amount: impl Into<Amount<'a>>, unit: Option<&str>) -> Result<BigInt> {
    to_base(amount, unit)
}
