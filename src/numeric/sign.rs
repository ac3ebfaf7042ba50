// ============================================================================
// Sign
// Three-valued sign shared by integers and decimals
// ============================================================================

use std::ops::{Mul, Neg};

/// Sign of an arbitrary-precision value.
///
/// `Zero` is reserved for values whose magnitude is zero, so a negative zero
/// can never be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Sign {
    /// Sign for a magnitude, given whether a minus was requested.
    #[inline]
    pub const fn for_magnitude(negative: bool, is_zero: bool) -> Self {
        if is_zero {
            Sign::Zero
        } else if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}
