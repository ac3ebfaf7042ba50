// ============================================================================
// Numeric Errors
// Error types for parsing and multiplying arbitrary-precision values
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Broad classification of a [`NumericError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Malformed numeral text
    Parse,
    /// A value too large to represent in the available resources
    Resource,
    /// Conversion to a bounded external type would not be exact
    Conversion,
}

/// Errors that can occur while parsing, multiplying or converting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Input string is empty
    Empty,
    /// A sign, decimal point or exponent marker is not followed (or preceded) by digits
    MissingDigits,
    /// A character outside the numeral grammar
    InvalidCharacter {
        /// Byte offset of the offending character
        position: usize,
        /// The offending character
        found: char,
    },
    /// More than one decimal point
    MultipleDecimalPoints,
    /// Exponent suffix is malformed
    InvalidExponent,
    /// Exponent does not fit the supported range
    ExponentOutOfRange,
    /// Result would exceed the configured or addressable limb capacity
    CapacityExceeded,
    /// Sum of operand scales overflowed
    ScaleOverflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl NumericError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            NumericError::Empty
            | NumericError::MissingDigits
            | NumericError::InvalidCharacter { .. }
            | NumericError::MultipleDecimalPoints
            | NumericError::InvalidExponent
            | NumericError::ExponentOutOfRange => ErrorKind::Parse,
            NumericError::CapacityExceeded | NumericError::ScaleOverflow => ErrorKind::Resource,
            NumericError::PrecisionLoss => ErrorKind::Conversion,
        }
    }

    /// Whether the error comes from malformed input text.
    #[inline]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse)
    }

    /// Whether the error comes from resource exhaustion.
    #[inline]
    pub const fn is_resource_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Resource)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "invalid input: empty string"),
            NumericError::MissingDigits => write!(f, "invalid input: expected at least one digit"),
            NumericError::InvalidCharacter { position, found } => {
                write!(f, "invalid input: unexpected {:?} at position {}", found, position)
            },
            NumericError::MultipleDecimalPoints => {
                write!(f, "invalid input: more than one decimal point")
            },
            NumericError::InvalidExponent => write!(f, "invalid input: malformed exponent"),
            NumericError::ExponentOutOfRange => write!(f, "invalid input: exponent out of range"),
            NumericError::CapacityExceeded => {
                write!(f, "capacity exceeded: value too large to represent")
            },
            NumericError::ScaleOverflow => write!(f, "scale overflow: combined scale too large"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
