// ============================================================================
// Numeric Module
// Arbitrary-precision integers and decimals
// ============================================================================
//
// This module provides:
// - Magnitude: canonical base-10^4 limb sequence
// - BigInteger / BigDecimal: signed values built on a magnitude
// - Parsing and formatting of decimal text
// - NumericError: Error types for parsing, multiplication and conversion
//
// Design principles:
// - One canonical representation per value (no high zero limbs, no -0)
// - Values are immutable; products are fresh values
// - Fallible operations return Result; only operators panic

mod big_decimal;
mod big_integer;
mod conversion;
mod errors;
mod format;
mod magnitude;
mod parse;
#[cfg(feature = "serde")]
mod serialization;
mod sign;

pub use big_decimal::BigDecimal;
pub use big_integer::BigInteger;
pub use errors::{ErrorKind, NumericError, NumericResult};
pub use magnitude::{Limb, Magnitude, LIMB_DIGITS, RADIX};
pub use parse::MAX_EXPONENT;
pub use sign::Sign;
