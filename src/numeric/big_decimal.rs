// ============================================================================
// BigDecimal
// Arbitrary-precision decimal: magnitude × 10^(-scale)
// ============================================================================

use super::big_integer::BigInteger;
use super::errors::{NumericError, NumericResult};
use super::format::{magnitude_digits, positional, scientific};
use super::magnitude::Magnitude;
use super::parse::{parse_decimal, parse_scientific};
use super::sign::Sign;
use crate::domain::config::DEFAULT_MAX_LIMBS;
use crate::engine::ArithmeticEngine;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};
use std::str::FromStr;

/// Signed decimal of unbounded precision.
///
/// The scale is kept exactly as written, so `"1.50"` has scale 2. Equality,
/// ordering and hashing compare numeric value (`1.50 == 1.5`), and the
/// formatter prints the shortest exact form.
///
/// # Example
/// ```
/// use bigmul::numeric::BigDecimal;
///
/// let a: BigDecimal = "1.5".parse().unwrap();
/// let b: BigDecimal = "2.25".parse().unwrap();
/// let product = &a * &b;
/// assert_eq!(product.scale(), 3);
/// assert_eq!(product.to_string(), "3.375");
/// ```
#[derive(Clone, Default)]
pub struct BigDecimal {
    sign: Sign,
    magnitude: Magnitude,
    scale: u64,
}

impl BigDecimal {
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build `±magnitude × 10^(-scale)`. A zero magnitude always yields
    /// zero, whatever the requested sign.
    pub fn from_parts(negative: bool, magnitude: Magnitude, scale: u64) -> Self {
        Self {
            sign: Sign::for_magnitude(negative, magnitude.is_zero()),
            magnitude,
            scale,
        }
    }

    /// Parse scientific notation such as `1.017e+01`, `-3E-4` or `+12.5`.
    ///
    /// A positive net exponent is folded into the magnitude, so the result
    /// never has a negative scale.
    ///
    /// # Errors
    /// Parse errors for malformed text, `ExponentOutOfRange` for exponents
    /// beyond [`MAX_EXPONENT`](super::MAX_EXPONENT) and `CapacityExceeded`
    /// if folding the exponent would need too many limbs.
    pub fn from_scientific_str(text: &str) -> NumericResult<Self> {
        let (negative, magnitude, scale) = parse_scientific(text, DEFAULT_MAX_LIMBS)?;
        Ok(Self::from_parts(negative, magnitude, scale))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Unscaled magnitude.
    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Number of fractional digits carried, including trailing zeros.
    #[inline]
    pub fn scale(&self) -> u64 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Whether the value has no non-zero fractional digit.
    pub fn is_integer(&self) -> bool {
        self.is_zero() || self.magnitude.trailing_zero_digits() as u64 >= self.scale
    }

    /// Same value with trailing fractional zeros stripped from the scale.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let strip = (self.magnitude.trailing_zero_digits() as u64).min(self.scale);
        if strip == 0 {
            return self.clone();
        }
        Self {
            sign: self.sign,
            magnitude: self.magnitude.div_pow10_exact(strip as usize),
            scale: self.scale - strip,
        }
    }

    /// The value as an integer, if it has no fractional part.
    pub fn to_integer(&self) -> Option<BigInteger> {
        if !self.is_integer() {
            return None;
        }
        let normalized = self.normalized();
        Some(BigInteger::from_parts(
            normalized.is_negative(),
            normalized.magnitude,
        ))
    }

    /// Checked multiplication on the global engine.
    ///
    /// # Errors
    /// Returns `ScaleOverflow` if the scales sum past `u64::MAX`, or
    /// `CapacityExceeded` if the product is too large to represent.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        ArithmeticEngine::global().multiply_decimals(self, rhs)
    }

    /// Exponent of the leading digit; only meaningful for non-zero values.
    fn leading_exponent(&self) -> i128 {
        self.magnitude.digit_count() as i128 - 1 - self.scale as i128
    }

    /// Compare absolute values.
    fn cmp_abs(&self, other: &Self) -> Ordering {
        self.leading_exponent()
            .cmp(&other.leading_exponent())
            .then_with(|| {
                // Same leading exponent: the significant digits decide, a
                // shorter digit string being a prefix padded with zeros.
                let lhs = magnitude_digits(&self.magnitude);
                let rhs = magnitude_digits(&other.magnitude);
                lhs.trim_end_matches('0').cmp(rhs.trim_end_matches('0'))
            })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        if self.scale == other.scale {
            return self.sign == other.sign && self.magnitude == other.magnitude;
        }
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Zero, Sign::Zero) => Ordering::Equal,
            (Sign::Negative, Sign::Negative) => other.cmp_abs(self),
            (Sign::Positive, Sign::Positive) => self.cmp_abs(other),
            (lhs, rhs) => lhs.cmp(&rhs),
        }
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.sign.hash(state);
        normalized.magnitude.hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for BigDecimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            sign: -self.sign,
            ..self
        }
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        self.checked_mul(rhs).expect("BigDecimal multiplication overflow")
    }
}

impl Mul for BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: BigDecimal) -> BigDecimal {
        &self * &rhs
    }
}

impl From<BigInteger> for BigDecimal {
    fn from(value: BigInteger) -> Self {
        let negative = value.is_negative();
        Self::from_parts(negative, value.into_magnitude(), 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        BigInteger::from(value).into()
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigDecimal({}, scale={})",
            self,
            self.scale
        )
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let text = positional(&magnitude_digits(&self.magnitude), self.scale);
        f.pad_integral(!self.is_negative(), "", &text)
    }
}

impl fmt::LowerExp for BigDecimal {
    /// `d[.ddd]e±X`; a precision truncates the mantissa's fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let text = scientific(&magnitude_digits(&self.magnitude), self.scale, f.precision());
        f.pad_integral(!self.is_negative(), "", &text)
    }
}

impl FromStr for BigDecimal {
    type Err = NumericError;

    /// Parse `-?[0-9]+(\.[0-9]+)?`, keeping the written scale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, magnitude, scale) = parse_decimal(s)?;
        Ok(Self::from_parts(negative, magnitude, scale))
    }
}
