// ============================================================================
// Basic Usage Example
// ============================================================================

use bigmul::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== bigmul Example ===\n");

    // Integers parse from exact decimal text
    let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
    let b: BigInteger = "-98765432109876543210".parse().unwrap();
    println!("{} * {} = {}", a, b, &a * &b);

    // Decimals keep every digit; scales add up
    let price: BigDecimal = "19.99".parse().unwrap();
    let quantity: BigDecimal = "1234567.125".parse().unwrap();
    let total = &price * &quantity;
    println!("{} * {} = {} (scale {})", price, quantity, total, total.scale());
    println!("scientific: {:e}, truncated: {:.3e}", total, total);

    // Scientific input, as accepted by the command-line calculator
    let avogadro = BigDecimal::from_scientific_str("6.02214076e23").unwrap();
    println!("avogadro = {}", avogadro);

    // A dedicated engine logs every kernel event
    println!("\n=== Strategy Dispatch ===");
    let engine = EngineBuilder::new()
        .karatsuba_threshold(16)
        .transform_threshold(256)
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    for digits in [10usize, 100, 1_000, 10_000] {
        let operand: BigInteger = "7".repeat(digits).parse().unwrap();
        let strategy = engine
            .config()
            .strategy_for(operand.magnitude().len(), operand.magnitude().len());
        let square = engine.multiply_integers(&operand, &operand).unwrap();
        println!(
            "{:>6} digits -> {:>6} digit square via {}",
            digits,
            square.digit_count(),
            strategy
        );
    }
    println!("stats: {:?}", engine.stats());

    // Handles are what the C ABI hands out
    println!("\n=== Handles ===");
    let x = DecimalHandle::parse("1.5").unwrap();
    let y = DecimalHandle::parse("2.25").unwrap();
    let z = x.multiply(&y).unwrap();
    println!("{} * {} = {}", x.as_str(), y.as_str(), z.as_str());
    println!("rejected: {:?}", DecimalHandle::parse("1.2.3"));
}
