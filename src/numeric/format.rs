// ============================================================================
// Formatter
// Canonical decimal text for magnitudes, integers and decimals
// ============================================================================

use super::magnitude::{Limb, Magnitude, LIMB_DIGITS};

/// Decimal digits of a magnitude without leading zeros; `"0"` for zero.
pub(crate) fn magnitude_digits(magnitude: &Magnitude) -> String {
    let limbs = magnitude.limbs();
    let Some((&top, rest)) = limbs.split_last() else {
        return "0".to_string();
    };

    let mut out = String::with_capacity(limbs.len() * LIMB_DIGITS);
    out.push_str(&top.to_string());
    for &limb in rest.iter().rev() {
        push_padded_limb(&mut out, limb);
    }
    debug_assert_eq!(out.len(), magnitude.digit_count());
    out
}

/// Append exactly `LIMB_DIGITS` digits, most significant first.
#[inline]
fn push_padded_limb(out: &mut String, mut limb: Limb) {
    let mut buffer = [b'0'; LIMB_DIGITS];
    for slot in buffer.iter_mut().rev() {
        *slot = b'0' + (limb % 10) as u8;
        limb /= 10;
    }
    out.extend(buffer.iter().map(|&b| b as char));
}

/// Positional text for `digits × 10^(-scale)`, with trailing fractional
/// zeros trimmed. `digits` must carry no leading zeros and must not be `"0"`.
pub(crate) fn positional(digits: &str, scale: u64) -> String {
    let len = digits.len() as u64;
    let (integer, leading, fraction) = if scale >= len {
        // All digits are fractional, with `scale - len` zeros after the point.
        ("0", (scale - len) as usize, digits)
    } else {
        let split = (len - scale) as usize;
        (&digits[..split], 0, &digits[split..])
    };

    let fraction = fraction.trim_end_matches('0');
    let mut out = String::with_capacity(integer.len() + 1 + leading + fraction.len());
    out.push_str(integer);
    if !fraction.is_empty() {
        out.push('.');
        out.extend(std::iter::repeat('0').take(leading));
        out.push_str(fraction);
    }
    out
}

/// Scientific text `d[.ddd]e±X` for `digits × 10^(-scale)`.
///
/// Fractional mantissa digits are truncated to `precision` when given.
pub(crate) fn scientific(digits: &str, scale: u64, precision: Option<usize>) -> String {
    let significant = digits.trim_end_matches('0');
    // Exponent of the leading digit: (len - 1) - scale, computed in i128 so
    // neither a huge scale nor a huge digit count can overflow.
    let exponent = digits.len() as i128 - 1 - scale as i128;

    let mut out = String::with_capacity(significant.len() + 24);
    out.push_str(&significant[..1]);
    let tail = &significant[1..];
    let tail = match precision {
        Some(p) => &tail[..p.min(tail.len())],
        None => tail,
    };
    if !tail.is_empty() {
        out.push('.');
        out.push_str(tail);
    }
    out.push('e');
    out.push(if exponent >= 0 { '+' } else { '-' });
    out.push_str(&exponent.unsigned_abs().to_string());
    out
}
