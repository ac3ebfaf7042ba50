// ============================================================================
// BigInteger
// Signed arbitrary-precision integer
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::magnitude_digits;
use super::magnitude::Magnitude;
use super::parse::parse_integer;
use super::sign::Sign;
use crate::engine::ArithmeticEngine;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

/// Signed integer of unbounded magnitude.
///
/// Values are immutable; multiplication returns a fresh value and leaves
/// both operands untouched. Zero always carries [`Sign::Zero`], so derived
/// equality and hashing are value equality.
///
/// # Example
/// ```
/// use bigmul::numeric::BigInteger;
///
/// let a: BigInteger = "123".parse().unwrap();
/// let b: BigInteger = "456".parse().unwrap();
/// assert_eq!((&a * &b).to_string(), "56088");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInteger {
    sign: Sign,
    magnitude: Magnitude,
}

impl BigInteger {
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from a requested sign and a magnitude. A zero magnitude always
    /// yields zero, whatever the requested sign.
    pub fn from_parts(negative: bool, magnitude: Magnitude) -> Self {
        Self {
            sign: Sign::for_magnitude(negative, magnitude.is_zero()),
            magnitude,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Consume the value, keeping only its magnitude.
    pub fn into_magnitude(self) -> Magnitude {
        self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude.clone())
    }

    /// Number of decimal digits in the canonical text, excluding the sign.
    pub fn digit_count(&self) -> usize {
        self.magnitude.digit_count().max(1)
    }

    /// Convert to a native integer if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude.to_u128()?;
        if self.is_negative() {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked multiplication on the global engine.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the product is too large to represent.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        ArithmeticEngine::global().multiply_integers(self, rhs)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Negative => other.magnitude.cmp(&self.magnitude),
                _ => self.magnitude.cmp(&other.magnitude),
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            sign: -self.sign,
            magnitude: self.magnitude,
        }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        self.checked_mul(rhs).expect("BigInteger multiplication capacity exceeded")
    }
}

impl Mul for BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: BigInteger) -> BigInteger {
        &self * &rhs
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_parts(false, Magnitude::from(value))
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from(value as i128)
    }
}

impl From<i128> for BigInteger {
    fn from(value: i128) -> Self {
        Self::from_parts(value < 0, Magnitude::from_u128(value.unsigned_abs()))
    }
}

impl From<Magnitude> for BigInteger {
    fn from(magnitude: Magnitude) -> Self {
        Self::from_parts(false, magnitude)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_digits(&self.magnitude))
    }
}

impl FromStr for BigInteger {
    type Err = NumericError;

    /// Parse `-?[0-9]+`. Leading zeros are accepted and `-0` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, magnitude) = parse_integer(s)?;
        Ok(Self::from_parts(negative, magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> BigInteger {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(int("123").to_string(), "123");
        assert_eq!(int("-9").to_string(), "-9");
        assert_eq!(int("000120").to_string(), "120");
        assert_eq!(int("-0").to_string(), "0");
        assert_eq!(int("-000").sign(), Sign::Zero);
        assert_eq!(int("10000").to_string(), "10000");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BigInteger>(), Err(NumericError::Empty));
        assert_eq!("-".parse::<BigInteger>(), Err(NumericError::MissingDigits));
        assert!("1.0".parse::<BigInteger>().is_err());
        assert!("12 ".parse::<BigInteger>().is_err());
    }

    #[test]
    fn test_multiplication() {
        assert_eq!((int("123") * int("456")).to_string(), "56088");
        assert_eq!((&int("-9") * &int("9")).to_string(), "-81");
        assert_eq!((&int("-9") * &int("-9")).to_string(), "81");
        let zero = &int("-5") * &int("0");
        assert!(zero.is_zero());
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn test_operands_unchanged() {
        let a = int("99999999999999999999");
        let b = int("-12345678901234567890");
        let _ = &a * &b;
        assert_eq!(a.to_string(), "99999999999999999999");
        assert_eq!(b.to_string(), "-12345678901234567890");
    }

    #[test]
    fn test_native_conversions() {
        assert_eq!(BigInteger::from(-42i64).to_string(), "-42");
        assert_eq!(BigInteger::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
        let big = &BigInteger::from(i128::MAX) * &BigInteger::from(2u64);
        assert_eq!(big.to_i128(), None);
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![int("5"), int("-100"), int("0"), int("-3"), int("100000")];
        values.sort();
        let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, ["-100", "-3", "0", "5", "100000"]);
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>6}", int("-42")), "   -42");
        assert_eq!(format!("{:+}", int("42")), "+42");
        assert_eq!(format!("{:06}", int("-42")), "-00042");
    }

    #[test]
    fn test_digit_count_and_abs() {
        assert_eq!(int("0").digit_count(), 1);
        assert_eq!(int("-123456789").digit_count(), 9);
        assert_eq!(int("-7").abs(), int("7"));
        assert_eq!(-int("7"), int("-7"));
        assert_eq!(-int("0"), int("0"));
    }
}
