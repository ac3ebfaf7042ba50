// ============================================================================
// bigmul Library
// Exact arbitrary-precision integer and decimal multiplication
// ============================================================================

//! # bigmul
//!
//! Arbitrary-precision integers and decimals with an exact, size-dispatched
//! multiplication kernel and a C ABI for external harnesses.
//!
//! ## Features
//!
//! - **Canonical base-10^4 limbs** with linear-time parsing and formatting
//! - **Three multiplication strategies** (schoolbook, Karatsuba, and a
//!   number-theoretic transform) picked by operand size
//! - **Exact decimals**: products keep every digit, scales add up
//! - **Opaque handles** behind a null-safe `extern "C"` interface
//! - **Kernel events** for logging and timing harnesses
//!
//! ## Example
//!
//! ```rust
//! use bigmul::prelude::*;
//! use std::sync::Arc;
//!
//! let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
//! let b: BigInteger = "-987654321098765432109876543210".parse().unwrap();
//! let product = &a * &b;
//! assert!(product.is_negative());
//!
//! // Decimals keep their scale: 1.5 * 2.25 = 3.375 (scale 1 + 2)
//! let x: BigDecimal = "1.5".parse().unwrap();
//! let y: BigDecimal = "2.25".parse().unwrap();
//! assert_eq!((&x * &y).to_string(), "3.375");
//!
//! // A dedicated engine with its own thresholds and event handler
//! let engine = EngineBuilder::new()
//!     .karatsuba_threshold(32)
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//! let squared = engine.multiply_integers(&a, &a).unwrap();
//! println!("{} ({} digits)", squared, squared.digit_count());
//! ```

pub mod domain;
pub mod engine;
pub mod ffi;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{KernelConfig, MultiplicationStrategy};
    pub use crate::engine::{create_from_config, ArithmeticEngine, EngineBuilder, EngineStats};
    pub use crate::ffi::{DecimalHandle, IntegerHandle};
    pub use crate::interfaces::{EventHandler, KernelEvent, LoggingEventHandler, NoOpEventHandler};
    pub use crate::numeric::{BigDecimal, BigInteger, NumericError, NumericResult, Sign};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn int(text: &str) -> BigInteger {
        text.parse().unwrap()
    }

    fn dec(text: &str) -> BigDecimal {
        text.parse().unwrap()
    }

    fn oracle(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    fn forced(strategy: MultiplicationStrategy) -> ArithmeticEngine {
        create_from_config(KernelConfig::forcing(strategy), Arc::new(NoOpEventHandler)).unwrap()
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!((&int("123") * &int("456")).to_string(), "56088");
        assert_eq!((&int("-9") * &int("9")).to_string(), "-81");

        let product = &dec("1.5") * &dec("2.25");
        assert_eq!(product.scale(), 3);
        assert_eq!(product.to_string(), "3.375");
    }

    #[test]
    fn test_zero_absorption() {
        let zero = int("0");
        for text in ["1", "-1", "99999999999999999999999", "-12345"] {
            let product = &zero * &int(text);
            assert!(product.is_zero());
            assert_eq!(product.to_string(), "0");
        }
        let product = &dec("-0.000") * &dec("-123.456");
        assert!(product.is_zero());
        assert_eq!(product.to_string(), "0");
    }

    #[test]
    fn test_all_strategies_agree_on_large_operands() {
        let a: String = (0..6_000).map(|i| char::from(b'0' + ((i * 7 + 3) % 10) as u8)).collect();
        let b: String = (0..4_500).map(|i| char::from(b'0' + ((i * 3 + 1) % 10) as u8)).collect();
        let (a, b) = (int(&a), int(&format!("-{}", b)));

        let products: Vec<BigInteger> = MultiplicationStrategy::ALL
            .iter()
            .map(|&strategy| forced(strategy).multiply_integers(&a, &b).unwrap())
            .collect();
        assert_eq!(products[0], products[1]);
        assert_eq!(products[1], products[2]);

        let expected = oracle(&a.to_string()) * oracle(&b.to_string());
        assert_eq!(products[0].to_string(), expected.to_string());
    }

    #[test]
    fn test_squaring_matches_oracle() {
        let digits: String = "9".repeat(20_000);
        let value = int(&digits);
        let squared = &value * &value;
        let expected = oracle(&digits) * oracle(&digits);
        assert_eq!(squared.to_string(), expected.to_string());
    }

    #[test]
    fn test_sign_law_quickcheck() {
        fn sign_law(a: i64, b: i64) -> bool {
            let product = &BigInteger::from(a) * &BigInteger::from(b);
            product.to_i128() == Some(a as i128 * b as i128)
                && product.is_negative() == ((a < 0) != (b < 0) && a != 0 && b != 0)
        }
        quickcheck::quickcheck(sign_law as fn(i64, i64) -> bool);
    }

    proptest! {
        #[test]
        fn prop_canonical_round_trip(text in "-?[0-9]{1,80}") {
            let value = int(&text);
            let rendered = value.to_string();
            prop_assert_eq!(&rendered, &oracle(&text).to_string());
            prop_assert_eq!(int(&rendered), value);
        }

        #[test]
        fn prop_decimal_round_trip(integer in "-?[0-9]{1,30}", fraction in "[0-9]{1,30}") {
            let value = dec(&format!("{}.{}", integer, fraction));
            let rendered = value.to_string();
            prop_assert!(!rendered.ends_with('0') || !rendered.contains('.'));
            prop_assert!(!rendered.ends_with('.'));
            prop_assert_eq!(dec(&rendered), value);
        }

        #[test]
        fn prop_canonical_decimal_text_survives(
            integer in "-?(0|[1-9][0-9]{0,30})",
            fraction in "([0-9]{0,30}[1-9])?",
        ) {
            prop_assume!(integer != "-0" || !fraction.is_empty());
            let text = if fraction.is_empty() {
                integer
            } else {
                format!("{}.{}", integer, fraction)
            };
            prop_assert_eq!(dec(&text).to_string(), text);
        }

        #[test]
        fn prop_decimal_commutative(
            a in "-?[0-9]{1,120}\\.[0-9]{1,120}",
            b in "-?[0-9]{1,120}(\\.[0-9]{1,120})?",
        ) {
            let (a, b) = (dec(&a), dec(&b));
            let (ab, ba) = (&a * &b, &b * &a);
            prop_assert_eq!(ab.scale(), ba.scale());
            prop_assert_eq!(ab.to_string(), ba.to_string());
        }

        #[test]
        fn prop_decimal_associative(
            a in "-?[0-9]{1,80}\\.[0-9]{1,80}",
            b in "-?[0-9]{1,80}\\.[0-9]{1,80}",
            c in "-?[0-9]{1,80}(\\.[0-9]{1,80})?",
        ) {
            let (a, b, c) = (dec(&a), dec(&b), dec(&c));
            let (left, right) = (&(&a * &b) * &c, &a * &(&b * &c));
            prop_assert_eq!(left.scale(), right.scale());
            prop_assert_eq!(left.to_string(), right.to_string());
        }

        #[test]
        fn prop_commutative(a in "-?[0-9]{1,400}", b in "-?[0-9]{1,400}") {
            let (a, b) = (int(&a), int(&b));
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn prop_associative(
            a in "-?[0-9]{1,200}",
            b in "-?[0-9]{1,200}",
            c in "-?[0-9]{1,200}",
        ) {
            let (a, b, c) = (int(&a), int(&b), int(&c));
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn prop_matches_num_bigint(a in "-?[0-9]{1,300}", b in "-?[0-9]{1,300}") {
            let product = &int(&a) * &int(&b);
            prop_assert_eq!(product.to_string(), (oracle(&a) * oracle(&b)).to_string());
        }

        #[test]
        fn prop_decimal_scale_law(
            a in (any::<i64>(), 0u32..12),
            b in (any::<i64>(), 0u32..12),
        ) {
            let (a, b) = (
                Decimal::new(a.0 / 1_000_000_000, a.1),
                Decimal::new(b.0 / 1_000_000_000, b.1),
            );
            let product = &BigDecimal::from(a) * &BigDecimal::from(b);
            prop_assert_eq!(product.scale(), (a.scale() + b.scale()) as u64);
            prop_assert_eq!(Decimal::try_from(&product).unwrap(), a * b);
        }
    }
}
