// ============================================================================
// Number-Theoretic Transform
// Exact convolution over the prime field p = 2^64 - 2^32 + 1
// ============================================================================
//
// Limbs are treated as polynomial coefficients evaluated at x = 10^4. The
// product's coefficients are computed as a cyclic convolution in Z/pZ, which
// is exact as long as every true coefficient stays below p: each coefficient
// is a sum of at most min(n, m) products below 10^8, so operands with fewer
// than ~1.8·10^11 limbs on the shorter side are always exact.
//
// p - 1 = 2^32 · (2^32 - 1), so power-of-two roots of unity exist up to
// length 2^32; 7 generates the multiplicative group.

use super::limbs::propagate_carries;
use crate::numeric::{Limb, NumericError, NumericResult};

/// The transform modulus.
pub const MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

/// Generator of the multiplicative group of Z/pZ.
const GENERATOR: u64 = 7;

/// log2 of the longest supported transform.
pub const MAX_LOG_LEN: u32 = 32;

#[inline]
fn add_mod(a: u64, b: u64) -> u64 {
    let (sum, overflow) = a.overflowing_add(b);
    if overflow || sum >= MODULUS {
        sum.wrapping_sub(MODULUS)
    } else {
        sum
    }
}

#[inline]
fn sub_mod(a: u64, b: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + (MODULUS - b)
    }
}

#[inline]
fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % MODULUS as u128) as u64
}

fn pow_mod(mut base: u64, mut exponent: u64) -> u64 {
    let mut result = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        exponent >>= 1;
    }
    result
}

#[inline]
fn inverse_mod(value: u64) -> u64 {
    pow_mod(value, MODULUS - 2)
}

/// Precomputed roots of unity for one power-of-two transform length.
///
/// Plans are immutable and can be shared between threads.
#[derive(Debug)]
pub struct TransformPlan {
    log_len: u32,
    roots: Vec<u64>,
    inverse_roots: Vec<u64>,
    len_inverse: u64,
}

impl TransformPlan {
    /// Build a plan for length `2^log_len`.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the length exceeds `2^MAX_LOG_LEN`, does
    /// not fit `usize`, or the root tables cannot be allocated.
    pub fn new(log_len: u32) -> NumericResult<Self> {
        if log_len > MAX_LOG_LEN || log_len >= usize::BITS {
            return Err(NumericError::CapacityExceeded);
        }
        let len = 1usize << log_len;
        let half = len / 2;

        let root = pow_mod(GENERATOR, (MODULUS - 1) >> log_len);
        let roots = power_table(root, half)?;
        let inverse_roots = power_table(inverse_mod(root), half)?;

        Ok(Self {
            log_len,
            roots,
            inverse_roots,
            len_inverse: inverse_mod(len as u64),
        })
    }

    /// Smallest `log_len` whose transform can hold a product of
    /// `product_limbs` limbs.
    pub fn log_len_for(product_limbs: usize) -> NumericResult<u32> {
        let len = product_limbs
            .max(1)
            .checked_next_power_of_two()
            .ok_or(NumericError::CapacityExceeded)?;
        let log_len = len.trailing_zeros();
        if log_len > MAX_LOG_LEN {
            return Err(NumericError::CapacityExceeded);
        }
        Ok(log_len)
    }

    #[inline]
    pub fn log_len(&self) -> u32 {
        self.log_len
    }

    /// Transform length.
    #[inline]
    pub fn len(&self) -> usize {
        1 << self.log_len
    }

    /// Multiply two little-endian limb slices via the transform.
    ///
    /// `lhs.len() + rhs.len()` must not exceed [`len`](Self::len).
    pub fn convolve(&self, lhs: &[Limb], rhs: &[Limb]) -> NumericResult<Vec<Limb>> {
        if lhs.is_empty() || rhs.is_empty() {
            return Ok(Vec::new());
        }
        debug_assert!(lhs.len() + rhs.len() <= self.len());
        let squaring = lhs.as_ptr() == rhs.as_ptr() && lhs.len() == rhs.len();

        let mut a = self.load(lhs)?;
        self.forward(&mut a);
        if squaring {
            for x in a.iter_mut() {
                *x = mul_mod(*x, *x);
            }
        } else {
            let mut b = self.load(rhs)?;
            self.forward(&mut b);
            for (x, &y) in a.iter_mut().zip(&b) {
                *x = mul_mod(*x, y);
            }
        }
        self.inverse(&mut a);

        a.truncate(lhs.len() + rhs.len() - 1);
        Ok(propagate_carries(&a))
    }

    /// Copy limbs into a zero-padded coefficient buffer of transform length.
    fn load(&self, limbs: &[Limb]) -> NumericResult<Vec<u64>> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(self.len())
            .map_err(|_| NumericError::CapacityExceeded)?;
        buffer.extend(limbs.iter().map(|&limb| limb as u64));
        buffer.resize(self.len(), 0);
        Ok(buffer)
    }

    fn forward(&self, values: &mut [u64]) {
        self.butterflies(values, &self.roots);
    }

    fn inverse(&self, values: &mut [u64]) {
        self.butterflies(values, &self.inverse_roots);
        for value in values.iter_mut() {
            *value = mul_mod(*value, self.len_inverse);
        }
    }

    /// Iterative radix-2 Cooley-Tukey over a bit-reversed input.
    fn butterflies(&self, values: &mut [u64], roots: &[u64]) {
        let len = values.len();
        debug_assert_eq!(len, self.len());
        if len <= 1 {
            return;
        }

        let shift = usize::BITS - self.log_len;
        for i in 0..len {
            let j = i.reverse_bits() >> shift;
            if i < j {
                values.swap(i, j);
            }
        }

        let mut half = 1;
        while half < len {
            // Stage roots are every `stride`-th power of the full-length root.
            let stride = len / (2 * half);
            for block in values.chunks_exact_mut(2 * half) {
                let (low, high) = block.split_at_mut(half);
                for (k, (u, v)) in low.iter_mut().zip(high.iter_mut()).enumerate() {
                    let t = mul_mod(*v, roots[k * stride]);
                    *v = sub_mod(*u, t);
                    *u = add_mod(*u, t);
                }
            }
            half *= 2;
        }
    }
}

/// `[1, root, root^2, ..., root^(count-1)]`.
fn power_table(root: u64, count: usize) -> NumericResult<Vec<u64>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(count)
        .map_err(|_| NumericError::CapacityExceeded)?;
    let mut power = 1;
    for _ in 0..count {
        table.push(power);
        power = mul_mod(power, root);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::schoolbook;
    use crate::numeric::RADIX;
    use proptest::prelude::*;

    #[test]
    fn test_field_arithmetic() {
        assert_eq!(add_mod(MODULUS - 1, 1), 0);
        assert_eq!(add_mod(MODULUS - 1, MODULUS - 1), MODULUS - 2);
        assert_eq!(sub_mod(0, 1), MODULUS - 1);
        assert_eq!(mul_mod(MODULUS - 1, MODULUS - 1), 1);
        assert_eq!(mul_mod(inverse_mod(12345), 12345), 1);
    }

    #[test]
    fn test_root_order() {
        for log_len in [1u32, 5, 16, 32] {
            let root = pow_mod(GENERATOR, (MODULUS - 1) >> log_len);
            assert_eq!(pow_mod(root, 1u64 << log_len), 1);
            assert_ne!(pow_mod(root, 1u64 << (log_len - 1)), 1);
        }
    }

    #[test]
    fn test_log_len_for() {
        assert_eq!(TransformPlan::log_len_for(0).unwrap(), 0);
        assert_eq!(TransformPlan::log_len_for(1).unwrap(), 0);
        assert_eq!(TransformPlan::log_len_for(5).unwrap(), 3);
        assert_eq!(TransformPlan::log_len_for(1024).unwrap(), 10);
        assert!(TransformPlan::new(MAX_LOG_LEN + 1).is_err());
    }

    #[test]
    fn test_forward_inverse_identity() {
        let plan = TransformPlan::new(4).unwrap();
        let input: Vec<u64> = (0..16).map(|i| i * 7 + 3).collect();
        let mut values = input.clone();
        plan.forward(&mut values);
        assert_ne!(values, input);
        plan.inverse(&mut values);
        assert_eq!(values, input);
    }

    #[test]
    fn test_convolve_small() {
        let plan = TransformPlan::new(2).unwrap();
        // 123 * 456 = 56088
        assert_eq!(plan.convolve(&[123], &[456]).unwrap(), vec![6088, 5]);
    }

    #[test]
    fn test_squaring_path() {
        let value: Vec<Limb> = vec![RADIX - 1; 40];
        let plan = TransformPlan::new(TransformPlan::log_len_for(80).unwrap()).unwrap();
        assert_eq!(
            plan.convolve(&value, &value).unwrap(),
            schoolbook::multiply(&value, &value)
        );
    }

    proptest! {
        #[test]
        fn prop_agrees_with_schoolbook(
            a in prop::collection::vec(0..RADIX, 1..120),
            b in prop::collection::vec(0..RADIX, 1..120),
        ) {
            let plan = TransformPlan::new(TransformPlan::log_len_for(a.len() + b.len()).unwrap()).unwrap();
            prop_assert_eq!(plan.convolve(&a, &b).unwrap(), schoolbook::multiply(&a, &b));
        }
    }
}
