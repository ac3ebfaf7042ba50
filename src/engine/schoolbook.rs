// ============================================================================
// Schoolbook Multiplication
// O(n·m) long multiplication with a single deferred carry pass
// ============================================================================

use super::limbs::propagate_carries;
use crate::numeric::Limb;

/// Multiply two little-endian limb slices.
///
/// Column sums are accumulated in `u64` without intermediate carries; each
/// column receives at most `min(n, m)` products below `10^8`, far from
/// overflow for any addressable operand.
pub(crate) fn multiply(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let (outer, inner) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut columns = vec![0u64; lhs.len() + rhs.len()];
    for (i, &a) in outer.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let a = a as u64;
        for (column, &b) in columns[i..].iter_mut().zip(inner) {
            *column += a * b as u64;
        }
    }
    propagate_carries(&columns)
}
