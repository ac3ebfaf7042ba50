// ============================================================================
// Owned Handles
// A value plus its lazily rendered, NUL-terminated text
// ============================================================================

use crate::engine::ArithmeticEngine;
use crate::numeric::{BigDecimal, BigInteger, NumericResult};
use std::cell::OnceCell;
use std::ffi::{CStr, CString};
use std::fmt;

/// A numeric kind that can live behind a [`Handle`].
pub trait HandleValue: Sized + fmt::Display {
    /// Kind name used in logs
    const KIND: &'static str;

    /// Parse the strict numeral grammar for this kind.
    fn parse(text: &str) -> NumericResult<Self>;

    /// Exact product on the given engine.
    fn multiply(&self, rhs: &Self, engine: &ArithmeticEngine) -> NumericResult<Self>;
}

impl HandleValue for BigInteger {
    const KIND: &'static str = "integer";

    fn parse(text: &str) -> NumericResult<Self> {
        text.parse()
    }

    fn multiply(&self, rhs: &Self, engine: &ArithmeticEngine) -> NumericResult<Self> {
        engine.multiply_integers(self, rhs)
    }
}

impl HandleValue for BigDecimal {
    const KIND: &'static str = "decimal";

    fn parse(text: &str) -> NumericResult<Self> {
        text.parse()
    }

    fn multiply(&self, rhs: &Self, engine: &ArithmeticEngine) -> NumericResult<Self> {
        engine.multiply_decimals(self, rhs)
    }
}

/// Exclusive owner of one value.
///
/// Failures degrade to `None` here (after a `debug!` record), which the C
/// ABI turns into null. The text view is rendered on first request and
/// stays valid, unchanged, until the handle is dropped. `Handle` is `Send`
/// but not `Sync`.
pub struct Handle<T: HandleValue> {
    value: T,
    text: OnceCell<CString>,
}

/// Handle to a [`BigInteger`]
pub type IntegerHandle = Handle<BigInteger>;

/// Handle to a [`BigDecimal`]
pub type DecimalHandle = Handle<BigDecimal>;

impl<T: HandleValue> Handle<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            text: OnceCell::new(),
        }
    }

    /// Parse `text`, or `None` if it is not a valid numeral of this kind.
    pub fn parse(text: &str) -> Option<Self> {
        match T::parse(text) {
            Ok(value) => Some(Self::new(value)),
            Err(error) => {
                tracing::debug!(kind = T::KIND, %error, "rejected numeral");
                None
            },
        }
    }

    /// Multiply on the global engine. Operands are left untouched.
    pub fn multiply(&self, rhs: &Self) -> Option<Self> {
        self.multiply_with(rhs, ArithmeticEngine::global())
    }

    /// Multiply on a specific engine.
    pub fn multiply_with(&self, rhs: &Self, engine: &ArithmeticEngine) -> Option<Self> {
        match self.value.multiply(&rhs.value, engine) {
            Ok(value) => Some(Self::new(value)),
            Err(error) => {
                tracing::debug!(kind = T::KIND, %error, "multiplication rejected");
                None
            },
        }
    }

    /// Canonical text, NUL-terminated. Rendered once, then cached.
    pub fn as_c_str(&self) -> &CStr {
        // Canonical numerals are ASCII digits, '-' and '.', never NUL.
        self.text
            .get_or_init(|| CString::new(self.value.to_string()).unwrap_or_default())
    }

    /// Canonical text.
    pub fn as_str(&self) -> &str {
        self.as_c_str().to_str().unwrap_or_default()
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: HandleValue> From<T> for Handle<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: HandleValue> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &T::KIND)
            .field("value", &format_args!("{}", self.value))
            .field("rendered", &self.text.get().is_some())
            .finish()
    }
}
