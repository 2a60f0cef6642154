use core::fmt;
use core::str::FromStr;

use alloc::borrow::ToOwned;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::ConversionError;

// ============================================================================
// Unit Table
// ============================================================================

/// Every known denomination and its value in wei, as a decimal digit string.
///
/// Each factor is `"0"` or a `1` followed by zeros. The mixed-case aliases
/// `Kwei`, `Mwei` and `Gwei` are kept for callers that enumerate the table,
/// but resolution lowercases its input, so they can never be looked up by
/// name. [`Denomination::all`] skips them.
pub const UNIT_MAP: &[(&str, &str)] = &[
    ("nokappa", "0"),
    ("wei", "1"),
    ("kwei", "1000"),
    ("Kwei", "1000"),
    ("babbage", "1000"),
    ("femtokappa", "1000"),
    ("mwei", "1000000"),
    ("Mwei", "1000000"),
    ("lovelace", "1000000"),
    ("picokappa", "1000000"),
    ("gwei", "1000000000"),
    ("Gwei", "1000000000"),
    ("shannon", "1000000000"),
    ("nanokappa", "1000000000"),
    ("nano", "1000000000"),
    ("szabo", "1000000000000"),
    ("microkappa", "1000000000000"),
    ("micro", "1000000000000"),
    ("finney", "1000000000000000"),
    ("millikappa", "1000000000000000"),
    ("milli", "1000000000000000"),
    ("kappa", "1000000000000000000"),
    ("kkappa", "1000000000000000000000"),
    ("grand", "1000000000000000000000"),
    ("mkappa", "1000000000000000000000000"),
    ("gkappa", "1000000000000000000000000000"),
    ("tkappa", "1000000000000000000000000000000"),
];

/// Unit used when the caller names none: 1 kappa = 10^18 wei.
pub const DEFAULT_UNIT: &str = "kappa";

/// Displays the names of [`UNIT_MAP`] as a comma separated list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitNames;

impl fmt::Display for UnitNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, _)) in UNIT_MAP.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// A resolved entry of [`UNIT_MAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    name: &'static str,
    factor: &'static str,
}

impl Denomination {
    /// Looks up a unit by name.
    ///
    /// `None` and the empty string both select [`DEFAULT_UNIT`]. Any other
    /// name is lowercased before the lookup, so `"GWEI"` and `"Gwei"` resolve
    /// to the `gwei` entry.
    pub fn resolve(unit: Option<&str>) -> crate::Result<Self> {
        let unit = match unit {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_UNIT,
        };

        let lowered = unit.to_lowercase();
        UNIT_MAP
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|&(name, factor)| Self { name, factor })
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: unit.to_owned(),
            })
    }

    /// Iterates the denominations reachable through [`Denomination::resolve`],
    /// in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        UNIT_MAP
            .iter()
            .filter(|(name, _)| !name.bytes().any(|b| b.is_ascii_uppercase()))
            .map(|&(name, factor)| Self { name, factor })
    }

    /// The table key this denomination was resolved to.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The value of one unit in wei, as written in the table.
    #[inline]
    pub const fn factor(&self) -> &'static str {
        self.factor
    }

    /// The value of one unit in wei.
    pub fn value(&self) -> BigUint {
        if self.is_zero() {
            return BigUint::zero();
        }
        BigUint::from(10u32).pow((self.factor.len() - 1) as u32)
    }

    /// Number of fractional digits used when splitting a wei amount.
    ///
    /// This is the exponent of the factor, floored at 1: `wei` and `nokappa`
    /// both report one digit even though they have no fractional part.
    #[inline]
    pub const fn decimals(&self) -> usize {
        match self.factor.len() - 1 {
            0 => 1,
            n => n,
        }
    }

    /// Whether one unit is worth zero wei, as `nokappa` is.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.factor.len() == 1 && self.factor.as_bytes()[0] == b'0'
    }
}

impl Default for Denomination {
    fn default() -> Self {
        Self {
            name: DEFAULT_UNIT,
            factor: "1000000000000000000",
        }
    }
}

impl FromStr for Denomination {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(Some(s))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Returns the value of `unit` in wei, defaulting to [`DEFAULT_UNIT`].
///
/// # Errors
/// [`ConversionError::UnknownUnit`] when the lowercased name is not in
/// [`UNIT_MAP`].
pub fn get_value_of_unit(unit: Option<&str>) -> crate::Result<BigInt> {
    Denomination::resolve(unit).map(|d| BigInt::from(d.value()))
}
