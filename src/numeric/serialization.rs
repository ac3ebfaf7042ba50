// ============================================================================
// Serde Support
// Big numbers travel as canonical decimal strings
// ============================================================================
//
// Strings keep every digit, independent of the consumer's native number
// width (JSON numbers are commonly read as f64).

use super::big_decimal::BigDecimal;
use super::big_integer::BigInteger;
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for BigDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(NumeralVisitor::new("an integer numeral string"))
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(NumeralVisitor::new("a decimal numeral string"))
    }
}

/// Visitor parsing any numeral type from a string.
struct NumeralVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<T> NumeralVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<'de, T: FromStr> Visitor<'de> for NumeralVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E>(self, s: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_str(s).map_err(|_| E::invalid_value(Unexpected::Str(s), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_json() {
        let value: BigInteger = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        assert_eq!(serde_json::from_str::<BigInteger>(&json).unwrap(), value);
    }

    #[test]
    fn test_decimal_json() {
        let value: BigDecimal = "3.3750".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"3.375\"");
        assert_eq!(serde_json::from_str::<BigDecimal>(&json).unwrap(), value);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(serde_json::from_str::<BigInteger>("\"12x\"").is_err());
        assert!(serde_json::from_str::<BigInteger>("12").is_err());
        assert!(serde_json::from_str::<BigDecimal>("\"1.2.3\"").is_err());
    }
}
