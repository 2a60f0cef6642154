use alloc::string::{String, ToString};

use num_bigint::{BigInt, BigUint, Sign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, parse_digits};
use crate::units::Denomination;
use crate::ConversionError;

/// Formatting switches for [`from_base`]. They never change the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ConversionOptions {
    /// Keep every fractional digit of the unit, including trailing zeros.
    pub pad: bool,
    /// Group the whole part in thousands with `,`.
    pub commify: bool,
}

impl ConversionOptions {
    /// Options with padding and grouping both off.
    pub const fn new() -> Self {
        Self {
            pad: false,
            commify: false,
        }
    }

    /// Sets [`ConversionOptions::pad`].
    pub const fn with_pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    /// Sets [`ConversionOptions::commify`].
    pub const fn with_commify(mut self, commify: bool) -> Self {
        self.commify = commify;
        self
    }
}

// ============================================================================
// Base to Unit
// ============================================================================

/// Converts an integer wei amount into a decimal string in `unit`.
///
/// The split into whole and fractional parts is exact; the fractional part
/// is printed with the unit's [`Denomination::decimals`] digits and, unless
/// `options.pad` is set, with its trailing zeros removed.
///
/// # Errors
/// - [`ConversionError::InvalidNumber`] if `amount` is not an integer
/// - [`ConversionError::UnknownUnit`] if `unit` cannot be resolved
/// - [`ConversionError::ZeroUnit`] if `unit` is worth zero wei
pub fn from_base<'a>(
    amount: impl Into<Amount<'a>>,
    unit: Option<&str>,
    options: ConversionOptions,
) -> crate::Result<String> {
    let amount = amount.into().into_big_int()?;
    let (sign, magnitude) = amount.into_parts();

    let denomination = Denomination::resolve(unit)?;
    if denomination.is_zero() {
        return Err(ConversionError::ZeroUnit {
            unit: denomination.name(),
        });
    }
    let base = denomination.value();
    let digits = denomination.decimals();

    let mut fraction = pad_left((&magnitude % &base).to_string(), digits);
    if !options.pad {
        trim_trailing_zeros(&mut fraction);
    }

    let mut whole = (&magnitude / &base).to_string();
    if options.commify {
        whole = commify(&whole);
    }

    let mut value = String::with_capacity(whole.len() + fraction.len() + 2);
    if sign == Sign::Minus {
        value.push('-');
    }
    value.push_str(&whole);
    if fraction != "0" {
        value.push('.');
        value.push_str(&fraction);
    }

    Ok(value)
}

// ============================================================================
// Unit to Base
// ============================================================================

/// Converts a decimal amount in `unit` into an integer wei amount.
///
/// Never rounds: an amount with more fractional digits than the unit
/// carries is rejected.
///
/// # Errors
/// - [`ConversionError::InvalidNumber`] if `amount` is not a decimal number
/// - [`ConversionError::UnknownUnit`] if `unit` cannot be resolved
/// - [`ConversionError::InvalidAmount`] for a lone `.`
/// - [`ConversionError::TooManyDecimalPoints`] for more than one `.`
/// - [`ConversionError::TooManyDecimalPlaces`] if the fraction is too long
pub fn to_base<'a>(amount: impl Into<Amount<'a>>, unit: Option<&str>) -> crate::Result<BigInt> {
    let input = amount.into().to_decimal_string()?;

    let denomination = Denomination::resolve(unit)?;
    let base = denomination.value();
    let digits = denomination.decimals();

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.as_str()),
    };

    if body == "." {
        return Err(ConversionError::InvalidAmount { amount: input });
    }

    let mut parts = body.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(ConversionError::TooManyDecimalPoints { amount: input });
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    if fraction.len() > digits {
        return Err(ConversionError::TooManyDecimalPlaces {
            amount: input,
            unit: denomination.name(),
            decimals: digits,
        });
    }
    let fraction = pad_right(fraction, digits);

    let (Some(whole), Some(fraction)) = (parse_digits(whole), parse_digits(&fraction)) else {
        return Err(ConversionError::InvalidNumber {
            value: input,
            kind: "string",
        });
    };

    let magnitude: BigUint = whole * base + fraction;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

// ============================================================================
// Digit Helpers
// ============================================================================

fn pad_left(digits: String, width: usize) -> String {
    if digits.len() >= width {
        return digits;
    }
    let mut padded = String::with_capacity(width);
    padded.extend(core::iter::repeat_n('0', width - digits.len()));
    padded.push_str(&digits);
    padded
}

fn pad_right(digits: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width.max(digits.len()));
    padded.push_str(digits);
    while padded.len() < width {
        padded.push('0');
    }
    padded
}

/// Cuts `digits` after its last non-zero digit, leaving `"0"` if every
/// digit is zero.
fn trim_trailing_zeros(digits: &mut String) {
    match digits.bytes().rposition(|b| b != b'0') {
        Some(last) => digits.truncate(last + 1),
        None => {
            digits.clear();
            digits.push('0');
        }
    }
}

/// Inserts `,` between every group of three digits, counted from the right.
fn commify(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
