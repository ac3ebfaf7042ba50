// ============================================================================
// Karatsuba Multiplication
// Divide-and-conquer with three half-size sub-products
// ============================================================================
//
// For x = x1·B^k + x0 and y = y1·B^k + y0:
//   x·y = z2·B^2k + (z1 - z2 - z0)·B^k + z0
// with z0 = x0·y0, z2 = x1·y1, z1 = (x0 + x1)(y0 + y1).
//
// Operands whose lengths differ by 2x or more are first cut into chunks of
// the shorter length so that every split is roughly balanced.

use super::limbs::{add, add_at, sub_assign, trim, trimmed};
use super::schoolbook;
use crate::domain::config::MIN_KARATSUBA_THRESHOLD;
use crate::numeric::Limb;

/// Multiply two little-endian limb slices, falling back to schoolbook once
/// the shorter operand has fewer than `threshold` limbs.
pub(crate) fn multiply(lhs: &[Limb], rhs: &[Limb], threshold: usize) -> Vec<Limb> {
    // Below four limbs the (x0 + x1) sums would not be shorter than x.
    let threshold = threshold.max(MIN_KARATSUBA_THRESHOLD);
    let (lhs, rhs) = (trimmed(lhs), trimmed(rhs));
    let (short, long) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    if short.len() < threshold {
        return schoolbook::multiply(short, long);
    }
    if long.len() >= 2 * short.len() {
        return multiply_unbalanced(short, long, threshold);
    }

    // short.len() > long.len() / 2 >= split, so both high halves are non-empty.
    let split = long.len() / 2;
    let (long_low, long_high) = long.split_at(split);
    let (short_low, short_high) = short.split_at(split);

    let low = multiply(long_low, short_low, threshold);
    let high = multiply(long_high, short_high, threshold);
    let mut middle = multiply(
        &add(long_low, long_high),
        &add(short_low, short_high),
        threshold,
    );
    sub_assign(&mut middle, &low);
    sub_assign(&mut middle, &high);

    let mut product = Vec::with_capacity(long.len() + short.len());
    product.extend_from_slice(&low);
    add_at(&mut product, &middle, split);
    add_at(&mut product, &high, 2 * split);
    trim(&mut product);
    product
}

fn multiply_unbalanced(short: &[Limb], long: &[Limb], threshold: usize) -> Vec<Limb> {
    let mut product = Vec::with_capacity(long.len() + short.len());
    for (index, chunk) in long.chunks(short.len()).enumerate() {
        let partial = multiply(chunk, short, threshold);
        add_at(&mut product, &partial, index * short.len());
    }
    trim(&mut product);
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RADIX;
    use proptest::prelude::*;

    fn limbs_strategy(max_len: usize) -> impl Strategy<Value = Vec<Limb>> {
        prop::collection::vec(0..RADIX, 0..max_len)
    }

    #[test]
    fn test_matches_schoolbook_on_all_nines() {
        let nines = vec![RADIX - 1; 37];
        assert_eq!(
            multiply(&nines, &nines, MIN_KARATSUBA_THRESHOLD),
            schoolbook::multiply(&nines, &nines)
        );
    }

    #[test]
    fn test_unbalanced_split() {
        let long: Vec<Limb> = (1..=50).collect();
        let short: Vec<Limb> = (1..=6).rev().collect();
        assert_eq!(
            multiply(&long, &short, MIN_KARATSUBA_THRESHOLD),
            schoolbook::multiply(&long, &short)
        );
    }

    #[test]
    fn test_sparse_low_halves() {
        // Low halves are all zero, exercising empty sub-products.
        let mut a = vec![0; 8];
        a.extend([1, 2, 3, 4, 5, 6, 7, 8]);
        let mut b = vec![0; 8];
        b.extend([9, 9, 9, 9, 9, 9, 9, 9]);
        assert_eq!(
            multiply(&a, &b, MIN_KARATSUBA_THRESHOLD),
            schoolbook::multiply(&a, &b)
        );
    }

    proptest! {
        #[test]
        fn prop_agrees_with_schoolbook(a in limbs_strategy(90), b in limbs_strategy(90)) {
            prop_assert_eq!(
                multiply(&a, &b, MIN_KARATSUBA_THRESHOLD),
                schoolbook::multiply(&a, &b)
            );
        }
    }
}
