// ============================================================================
// Parser
// Decimal literal text to canonical magnitudes
// ============================================================================
//
// Grammars (D = ASCII digit):
// - integer:    -?D+
// - decimal:    -?D+(.D+)?
// - scientific: [+-]?D+(.D+)?([eE][+-]?D+)?
//
// Leading zeros are accepted and dropped by normalization. Trailing
// fractional zeros are kept: the scale is the number of written fraction
// digits.

use super::errors::{NumericError, NumericResult};
use super::magnitude::{Limb, LimbVec, Magnitude, LIMB_DIGITS, RADIX};

/// Largest accepted exponent magnitude in scientific input.
pub const MAX_EXPONENT: i64 = 1_000_000_000;

/// A parsed decimal: sign request, magnitude and scale.
pub(crate) type ParsedDecimal = (bool, Magnitude, u64);

/// Parse `-?D+`, returning the requested sign and the magnitude.
pub(crate) fn parse_integer(text: &str) -> NumericResult<(bool, Magnitude)> {
    if text.is_empty() {
        return Err(NumericError::Empty);
    }
    let (negative, body) = split_minus(text);
    let offset = negative as usize;
    validate_digits(body, offset)?;
    let magnitude = magnitude_from_digits(body.as_bytes().iter(), body.len());
    Ok((negative, magnitude))
}

/// Parse `-?D+(.D+)?`.
pub(crate) fn parse_decimal(text: &str) -> NumericResult<ParsedDecimal> {
    parse_decimal_at(text, 0)
}

/// Parse scientific notation, folding a net positive exponent into the
/// magnitude so that the returned scale is never negative.
pub(crate) fn parse_scientific(text: &str, max_limbs: usize) -> NumericResult<ParsedDecimal> {
    if text.is_empty() {
        return Err(NumericError::Empty);
    }
    let start = usize::from(text.starts_with('+'));
    let rest = &text[start..];
    if start == 1 && rest.starts_with('-') {
        return Err(NumericError::InvalidCharacter {
            position: 1,
            found: '-',
        });
    }

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };
    if mantissa.is_empty() {
        return Err(NumericError::MissingDigits);
    }
    let (negative, magnitude, scale) = parse_decimal_at(mantissa, start)?;
    let exponent = match exponent {
        Some(exponent) => parse_exponent(exponent)?,
        None => 0,
    };

    let net_scale = scale as i128 - exponent as i128;
    if net_scale >= 0 {
        let scale = u64::try_from(net_scale).map_err(|_| NumericError::ExponentOutOfRange)?;
        Ok((negative, magnitude, scale))
    } else {
        let shift =
            usize::try_from(-net_scale).map_err(|_| NumericError::ExponentOutOfRange)?;
        let magnitude = magnitude.mul_pow10(shift, max_limbs)?;
        Ok((negative, magnitude, 0))
    }
}

fn parse_decimal_at(text: &str, offset: usize) -> NumericResult<ParsedDecimal> {
    if text.is_empty() {
        return Err(NumericError::Empty);
    }
    let (negative, body) = split_minus(text);
    let offset = offset + negative as usize;

    let (integer, fraction) = match body.find('.') {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    validate_digits(integer, offset)?;

    let fraction = match fraction {
        Some(fraction) => {
            if fraction.contains('.') {
                return Err(NumericError::MultipleDecimalPoints);
            }
            validate_digits(fraction, offset + integer.len() + 1)?;
            fraction
        },
        None => "",
    };

    let digits = integer.as_bytes().iter().chain(fraction.as_bytes());
    let magnitude = magnitude_from_digits(digits, integer.len() + fraction.len());
    Ok((negative, magnitude, fraction.len() as u64))
}

fn parse_exponent(text: &str) -> NumericResult<i64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidExponent);
    }
    let exponent: i64 = text
        .parse()
        .map_err(|_| NumericError::ExponentOutOfRange)?;
    if exponent.unsigned_abs() > MAX_EXPONENT as u64 {
        return Err(NumericError::ExponentOutOfRange);
    }
    Ok(exponent)
}

#[inline]
fn split_minus(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

fn validate_digits(digits: &str, offset: usize) -> NumericResult<()> {
    if digits.is_empty() {
        return Err(NumericError::MissingDigits);
    }
    match digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((pos, found)) => Err(NumericError::InvalidCharacter {
            position: offset + pos,
            found,
        }),
        None => Ok(()),
    }
}

/// Pack validated ASCII digits (most significant first) into limbs.
fn magnitude_from_digits<'a, I>(digits: I, count: usize) -> Magnitude
where
    I: DoubleEndedIterator<Item = &'a u8>,
{
    let mut limbs = LimbVec::with_capacity(count / LIMB_DIGITS + 1);
    let mut limb: Limb = 0;
    let mut place: Limb = 1;
    for &digit in digits.rev() {
        limb += (digit - b'0') as Limb * place;
        place *= 10;
        if place == RADIX {
            limbs.push(limb);
            limb = 0;
            place = 1;
        }
    }
    if place > 1 {
        limbs.push(limb);
    }
    Magnitude::from_limb_vec(limbs)
}
