use alloc::borrow::{Cow, ToOwned};
use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::ConversionError;

/// A numeric input to a conversion.
///
/// Strings carry decimal text such as `"-12.5"`. Floats are rendered with
/// their shortest round-trip representation. Integers of every primitive
/// width convert into the exact [`Amount::BigInt`] branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount<'a> {
    Str(Cow<'a, str>),
    Number(f64),
    BigInt(BigInt),
}

// ============================================================================
// Normalization
// ============================================================================

impl Amount<'_> {
    /// Renders the amount as a plain decimal string.
    ///
    /// Strings must consist of an optional leading `-` followed by one or more
    /// digits or `.` characters and are returned unchanged; how many points
    /// they contain is checked by the conversion, not here.
    pub fn to_decimal_string(&self) -> crate::Result<String> {
        match self {
            Self::Str(s) => {
                if is_numeric_str(s) {
                    Ok(s.as_ref().to_owned())
                } else {
                    Err(ConversionError::InvalidNumber {
                        value: s.as_ref().to_owned(),
                        kind: "string",
                    })
                }
            }
            Self::Number(n) => format_f64(*n),
            Self::BigInt(n) => Ok(n.to_string()),
        }
    }

    /// Converts the amount into an integer, rejecting fractional values.
    pub fn into_big_int(self) -> crate::Result<BigInt> {
        let kind = match self {
            Self::BigInt(n) => return Ok(n),
            Self::Str(_) => "string",
            Self::Number(_) => "number",
        };
        let text = self.to_decimal_string()?;

        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, text.as_str()),
        };

        match parse_digits(digits) {
            Some(magnitude) => Ok(BigInt::from_biguint(sign, magnitude)),
            None => Err(ConversionError::InvalidNumber { value: text, kind }),
        }
    }
}

/// Returns whether `s` matches `^-?[0-9.]+$`.
fn is_numeric_str(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn format_f64(n: f64) -> crate::Result<String> {
    if !n.is_finite() {
        return Err(ConversionError::InvalidNumber {
            value: n.to_string(),
            kind: "number",
        });
    }
    // -0.0 prints as "-0"
    if n == 0.0 {
        return Ok("0".to_owned());
    }
    Ok(n.to_string())
}

/// Parses a run of ASCII digits. Returns `None` for an empty or non-digit
/// input.
pub(crate) fn parse_digits(digits: &str) -> Option<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
}

/// Renders any supported input as a decimal string.
///
/// # Errors
/// [`ConversionError::InvalidNumber`] for strings outside `^-?[0-9.]+$` and
/// for non-finite floats.
pub fn number_to_string<'a>(value: impl Into<Amount<'a>>) -> crate::Result<String> {
    value.into().to_decimal_string()
}

// ============================================================================
// Conversions
// ============================================================================

impl<'a> From<&'a str> for Amount<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Amount<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Amount<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Amount<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Amount<'_> {
    /// Keeps the shortest `f32` rendering; widening to `f64` first would
    /// turn `0.1` into `0.10000000149011612`.
    fn from(value: f32) -> Self {
        if !value.is_finite() {
            return Self::Number(value as f64);
        }
        if value == 0.0 {
            return Self::Str(Cow::Borrowed("0"));
        }
        Self::Str(Cow::Owned(value.to_string()))
    }
}

impl From<BigInt> for Amount<'_> {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<&BigInt> for Amount<'_> {
    #[inline]
    fn from(value: &BigInt) -> Self {
        Self::BigInt(value.clone())
    }
}

impl From<BigUint> for Amount<'_> {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self::BigInt(BigInt::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::BigInt(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Amount<'_> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
            // Strings keep the full magnitude in JSON
            Self::BigInt(n) => serializer.collect_str(n),
        }
    }
}

/// 2^53. Past it an `f64` no longer holds every integer exactly.
#[cfg(feature = "serde")]
const MAX_SAFE_F64: f64 = 9_007_199_254_740_992.0;

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Amount<'static> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl<'de> de::Visitor<'de> for AmountVisitor {
            type Value = Amount<'static>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal number string or a number")
            }

            fn visit_str<E>(self, v: &str) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::Str(Cow::Owned(v.to_owned())))
            }

            fn visit_string<E>(self, v: String) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::Str(Cow::Owned(v)))
            }

            fn visit_f64<E>(self, v: f64) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                // Integers past u64 reach here already rounded
                if v > MAX_SAFE_F64 || v < -MAX_SAFE_F64 {
                    return Err(de::Error::custom(
                        "integer amount too large for a number, send it as a string",
                    ));
                }
                Ok(Amount::Number(v))
            }

            fn visit_i64<E>(self, v: i64) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::from(v))
            }

            fn visit_u64<E>(self, v: u64) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::from(v))
            }

            fn visit_i128<E>(self, v: i128) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::from(v))
            }

            fn visit_u128<E>(self, v: u128) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::from(v))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}


#[cfg(test)]
mod big_int_tests {
    use super::*;

    #[test]
    fn test_integer_strings() {
        assert_eq!(Amount::from("1000").into_big_int().unwrap(), BigInt::from(1000));
        assert_eq!(Amount::from("-1000").into_big_int().unwrap(), BigInt::from(-1000));
        assert_eq!(Amount::from("-0").into_big_int().unwrap(), BigInt::from(0));
        assert_eq!(
            Amount::from("123456789012345678901234567890")
                .into_big_int()
                .unwrap()
                .to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_fractional_rejected() {
        assert_eq!(
            Amount::from("1.5").into_big_int(),
            Err(ConversionError::InvalidNumber {
                value: "1.5".to_owned(),
                kind: "string"
            })
        );
        assert_eq!(
            Amount::from(1.5f64).into_big_int(),
            Err(ConversionError::InvalidNumber {
                value: "1.5".to_owned(),
                kind: "number"
            })
        );
        assert!(Amount::from(".").into_big_int().is_err());
    }

    #[test]
    fn test_integral_float() {
        assert_eq!(Amount::from(3.0f64).into_big_int().unwrap(), BigInt::from(3));
        assert_eq!(
            Amount::from(1e20f64).into_big_int().unwrap(),
            BigInt::from(100_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_big_int_passthrough() {
        let n = BigInt::from(-5);
        assert_eq!(Amount::from(n.clone()).into_big_int().unwrap(), n);
        assert_eq!(
            Amount::from(BigUint::from(5u8)).into_big_int().unwrap(),
            BigInt::from(5)
        );
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("007"), Some(BigUint::from(7u8)));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("1_000"), None);
    }
}
