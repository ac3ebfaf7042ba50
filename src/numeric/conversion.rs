// ============================================================================
// Conversion to and from rust_decimal (for API boundaries)
// ============================================================================

use super::big_decimal::BigDecimal;
use super::errors::NumericError;
use super::magnitude::Magnitude;
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry.
const DECIMAL_MAX_SCALE: u64 = 28;

/// Largest mantissa a `Decimal` can carry (2^96 - 1).
const DECIMAL_MAX_MANTISSA: u128 = (1 << 96) - 1;

impl From<Decimal> for BigDecimal {
    /// Exact; the `Decimal`'s scale is kept as is.
    fn from(value: Decimal) -> Self {
        let mantissa = value.mantissa();
        BigDecimal::from_parts(
            mantissa < 0,
            Magnitude::from_u128(mantissa.unsigned_abs()),
            value.scale() as u64,
        )
    }
}

impl TryFrom<&BigDecimal> for Decimal {
    type Error = NumericError;

    /// Convert to rust_decimal::Decimal.
    ///
    /// Trailing fractional zeros are dropped first, so `1.5000` converts
    /// whatever its written scale.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value needs more than 28 fractional digits
    ///   or a mantissa wider than 96 bits
    fn try_from(value: &BigDecimal) -> Result<Self, Self::Error> {
        let normalized = value.normalized();
        if normalized.scale() > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }
        let mantissa = normalized
            .magnitude()
            .to_u128()
            .filter(|&m| m <= DECIMAL_MAX_MANTISSA)
            .ok_or(NumericError::PrecisionLoss)?;

        // Bounded by 2^96 above, so the cast cannot wrap.
        let mantissa = if normalized.is_negative() {
            -(mantissa as i128)
        } else {
            mantissa as i128
        };
        Decimal::try_from_i128_with_scale(mantissa, normalized.scale() as u32)
            .map_err(|_| NumericError::PrecisionLoss)
    }
}

impl TryFrom<BigDecimal> for Decimal {
    type Error = NumericError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Decimal::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_decimal_keeps_scale() {
        let value = BigDecimal::from(Decimal::from_str("-12.500").unwrap());
        assert_eq!(value.scale(), 3);
        assert_eq!(value.to_string(), "-12.5");
        assert!(BigDecimal::from(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_to_decimal() {
        let value: BigDecimal = "3.37500".parse().unwrap();
        let decimal = Decimal::try_from(&value).unwrap();
        assert_eq!(decimal, Decimal::from_str("3.375").unwrap());
        assert_eq!(decimal.scale(), 3);

        let negative: BigDecimal = "-0.0001".parse().unwrap();
        assert_eq!(
            Decimal::try_from(negative).unwrap(),
            Decimal::from_str("-0.0001").unwrap()
        );
    }

    #[test]
    fn test_to_decimal_precision_loss() {
        let too_fine: BigDecimal = "0.00000000000000000000000000001".parse().unwrap();
        assert_eq!(Decimal::try_from(&too_fine), Err(NumericError::PrecisionLoss));

        let too_wide: BigDecimal = "99999999999999999999999999999".parse().unwrap();
        assert_eq!(Decimal::try_from(&too_wide), Err(NumericError::PrecisionLoss));

        // Trailing zeros beyond the scale limit are not significant.
        let padded: BigDecimal = "1.0000000000000000000000000000000".parse().unwrap();
        assert_eq!(Decimal::try_from(&padded).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_decimal_round_trip() {
        for text in ["0", "1", "-79228162514264337593543950335", "0.0000000000000000000000000001"] {
            let decimal = Decimal::from_str(text).unwrap();
            assert_eq!(Decimal::try_from(&BigDecimal::from(decimal)).unwrap(), decimal);
        }
    }
}
