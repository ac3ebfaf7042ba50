// ============================================================================
// Limb Arithmetic
// Carry-propagating helpers on little-endian base-10^4 limb slices
// ============================================================================

use crate::numeric::{Limb, RADIX};

/// Slice without its high zero limbs.
#[inline]
pub(crate) fn trimmed(limbs: &[Limb]) -> &[Limb] {
    let end = limbs.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1);
    &limbs[..end]
}

/// Strip high zero limbs in place.
#[inline]
pub(crate) fn trim(limbs: &mut Vec<Limb>) {
    let len = trimmed(limbs).len();
    limbs.truncate(len);
}

/// `lhs + rhs` as a new limb vector.
pub(crate) fn add(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        let s = limb + short.get(i).copied().unwrap_or(0) + carry;
        let (digit, next) = if s >= RADIX { (s - RADIX, 1) } else { (s, 0) };
        sum.push(digit);
        carry = next;
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum
}

/// `acc += addend × RADIX^offset`, growing `acc` as needed.
pub(crate) fn add_at(acc: &mut Vec<Limb>, addend: &[Limb], offset: usize) {
    let end = offset + addend.len();
    if acc.len() < end {
        acc.resize(end, 0);
    }

    let mut carry = 0;
    for (slot, &limb) in acc[offset..end].iter_mut().zip(addend) {
        let s = *slot + limb + carry;
        (*slot, carry) = if s >= RADIX { (s - RADIX, 1) } else { (s, 0) };
    }

    let mut i = end;
    while carry > 0 {
        if i == acc.len() {
            acc.push(carry);
            break;
        }
        let s = acc[i] + carry;
        (acc[i], carry) = if s >= RADIX { (s - RADIX, 1) } else { (s, 0) };
        i += 1;
    }
}

/// `acc -= subtrahend`; `acc` must not be smaller than `subtrahend`.
pub(crate) fn sub_assign(acc: &mut Vec<Limb>, subtrahend: &[Limb]) {
    let subtrahend = trimmed(subtrahend);
    debug_assert!(acc.len() >= subtrahend.len());

    let mut borrow = 0;
    for (i, slot) in acc.iter_mut().enumerate() {
        let sub = subtrahend.get(i).copied().unwrap_or(0) + borrow;
        if sub == 0 && i >= subtrahend.len() {
            break;
        }
        (*slot, borrow) = if *slot >= sub {
            (*slot - sub, 0)
        } else {
            (*slot + RADIX - sub, 1)
        };
    }
    debug_assert_eq!(borrow, 0, "subtraction underflow");
    trim(acc);
}

/// Fold unnormalized column sums into canonical limbs.
pub(crate) fn propagate_carries(columns: &[u64]) -> Vec<Limb> {
    let radix = RADIX as u128;
    let mut limbs = Vec::with_capacity(columns.len() + 2);
    let mut carry: u128 = 0;
    for &column in columns {
        carry += column as u128;
        limbs.push((carry % radix) as Limb);
        carry /= radix;
    }
    while carry > 0 {
        limbs.push((carry % radix) as Limb);
        carry /= radix;
    }
    trim(&mut limbs);
    limbs
}
