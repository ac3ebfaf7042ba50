// ============================================================================
// Magnitude
// Canonical base-10^4 limb sequence for unsigned arbitrary-precision values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// One base-[`RADIX`] chunk of a magnitude.
pub type Limb = u32;

/// Limb radix. A power of ten keeps parsing and formatting linear.
pub const RADIX: Limb = 10_000;

/// Decimal digits held by one limb.
pub const LIMB_DIGITS: usize = 4;

/// Limbs kept inline before spilling to the heap.
const INLINE_LIMBS: usize = 8;

/// `10^i` for `i` in `0..LIMB_DIGITS`.
const POW10: [Limb; LIMB_DIGITS] = [1, 10, 100, 1_000];

pub(crate) type LimbVec = SmallVec<[Limb; INLINE_LIMBS]>;

/// Unsigned arbitrary-precision integer.
///
/// Limbs are stored least-significant first and every limb is `< RADIX`.
/// The most-significant limb is never zero; zero is the empty sequence, so
/// each value has exactly one representation and derived equality and
/// hashing are value equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Magnitude {
    limbs: LimbVec,
}

impl Magnitude {
    /// The zero magnitude.
    #[inline]
    pub fn zero() -> Self {
        Self {
            limbs: LimbVec::new(),
        }
    }

    /// Build from little-endian limbs, stripping high zero limbs.
    ///
    /// # Panics
    /// Panics if any limb is not below [`RADIX`].
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        assert!(
            limbs.iter().all(|&limb| limb < RADIX),
            "limb out of range for radix {}",
            RADIX
        );
        let mut magnitude = Self {
            limbs: LimbVec::from_vec(limbs),
        };
        magnitude.normalize();
        magnitude
    }

    pub(crate) fn from_limb_vec(limbs: LimbVec) -> Self {
        let mut magnitude = Self { limbs };
        magnitude.normalize();
        magnitude
    }

    /// Build from a native integer.
    pub fn from_u128(mut value: u128) -> Self {
        let mut limbs = LimbVec::new();
        while value > 0 {
            limbs.push((value % RADIX as u128) as Limb);
            value /= RADIX as u128;
        }
        Self { limbs }
    }

    /// Convert to a native integer if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.limbs.iter().rev().try_fold(0u128, |acc, &limb| {
            acc.checked_mul(RADIX as u128)?.checked_add(limb as u128)
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Little-endian limbs.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of limbs (zero for the zero magnitude).
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of decimal digits, or 0 for zero.
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                let top_digits = POW10.iter().take_while(|&&p| p <= top).count();
                (self.limbs.len() - 1) * LIMB_DIGITS + top_digits
            },
        }
    }

    /// Number of trailing zero decimal digits, or 0 for zero.
    pub fn trailing_zero_digits(&self) -> usize {
        let Some(first_nonzero) = self.limbs.iter().position(|&limb| limb != 0) else {
            return 0;
        };
        let limb = self.limbs[first_nonzero];
        let within = (1..LIMB_DIGITS)
            .take_while(|&i| limb % POW10[i] == 0)
            .count();
        first_nonzero * LIMB_DIGITS + within
    }

    /// Whether the canonical-form invariant holds.
    pub fn is_normalized(&self) -> bool {
        self.limbs.last().map_or(true, |&top| top != 0)
            && self.limbs.iter().all(|&limb| limb < RADIX)
    }

    // ========================================================================
    // Scaling by powers of ten
    // ========================================================================

    /// Multiply by `10^exponent`.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the result would need more than
    /// `max_limbs` limbs or cannot be allocated.
    pub fn mul_pow10(&self, exponent: usize, max_limbs: usize) -> NumericResult<Self> {
        if self.is_zero() || exponent == 0 {
            return Ok(self.clone());
        }
        let whole = exponent / LIMB_DIGITS;
        let factor = POW10[exponent % LIMB_DIGITS];
        let needed = self
            .limbs
            .len()
            .checked_add(whole)
            .and_then(|n| n.checked_add(1))
            .ok_or(NumericError::CapacityExceeded)?;
        if needed > max_limbs {
            return Err(NumericError::CapacityExceeded);
        }

        let mut limbs = LimbVec::new();
        limbs
            .try_reserve_exact(needed)
            .map_err(|_| NumericError::CapacityExceeded)?;
        limbs.resize(whole, 0);
        let mut carry = 0;
        for &limb in &self.limbs {
            let cur = limb * factor + carry;
            limbs.push(cur % RADIX);
            carry = cur / RADIX;
        }
        if carry > 0 {
            limbs.push(carry);
        }
        Ok(Self::from_limb_vec(limbs))
    }

    /// Divide by `10^exponent`, which must divide the value exactly.
    pub fn div_pow10_exact(&self, exponent: usize) -> Self {
        debug_assert!(exponent <= self.trailing_zero_digits() || self.is_zero());
        if self.is_zero() || exponent == 0 {
            return self.clone();
        }
        let whole = exponent / LIMB_DIGITS;
        let divisor = POW10[exponent % LIMB_DIGITS];
        let mut limbs: LimbVec = self.limbs[whole.min(self.limbs.len())..].into();
        let mut remainder = 0;
        for limb in limbs.iter_mut().rev() {
            let cur = remainder * RADIX + *limb;
            *limb = cur / divisor;
            remainder = cur % divisor;
        }
        debug_assert_eq!(remainder, 0);
        Self::from_limb_vec(limbs)
    }

    /// Strip high zero limbs.
    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self::from_u128(value as u128)
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Magnitude({}, limbs={})", super::format::magnitude_digits(self), self.len())
    }
}
