// ============================================================================
// Multiplication Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Strategy Comparison - Every strategy forced on the same balanced operands
// 2. Automatic Dispatch - Default thresholds across operand sizes
// 3. Unbalanced Operands - A short operand against a long one
// 4. Text Round Trip - Parsing and formatting cost next to the product
// ============================================================================

use bigmul::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::sync::Arc;

fn random_digits(rng: &mut StdRng, digits: usize) -> String {
    let mut text = String::with_capacity(digits);
    text.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..digits {
        text.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    text
}

fn random_integer(rng: &mut StdRng, digits: usize) -> BigInteger {
    random_digits(rng, digits).parse().unwrap()
}

fn engine_for(strategy: MultiplicationStrategy) -> ArithmeticEngine {
    EngineBuilder::new()
        .force_strategy(strategy)
        .build(Arc::new(NoOpEventHandler))
        .unwrap()
}

// ============================================================================
// Strategy Comparison
// ============================================================================

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_comparison");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for digits in [64usize, 512, 4_096, 16_384] {
        let lhs = random_integer(&mut rng, digits);
        let rhs = random_integer(&mut rng, digits);

        for strategy in MultiplicationStrategy::ALL {
            let engine = engine_for(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), digits),
                &(&lhs, &rhs),
                |b, (lhs, rhs)| {
                    b.iter(|| black_box(engine.multiply_integers(lhs, rhs).unwrap()));
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Automatic Dispatch
// ============================================================================

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_dispatch");
    group.sample_size(20);
    let engine = ArithmeticEngine::default();
    let mut rng = StdRng::seed_from_u64(42);

    for digits in [10usize, 100, 1_000, 10_000, 100_000] {
        let lhs = random_integer(&mut rng, digits);
        let rhs = random_integer(&mut rng, digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| black_box(engine.multiply_integers(lhs, rhs).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Unbalanced Operands
// ============================================================================

fn benchmark_unbalanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbalanced");
    let engine = ArithmeticEngine::default();
    let mut rng = StdRng::seed_from_u64(7);
    let long = random_integer(&mut rng, 50_000);

    for short_digits in [8usize, 200, 5_000] {
        let short = random_integer(&mut rng, short_digits);
        group.bench_with_input(
            BenchmarkId::from_parameter(short_digits),
            &short,
            |b, short| {
                b.iter(|| black_box(engine.multiply_integers(short, &long).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Text Round Trip
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_round_trip");
    let mut rng = StdRng::seed_from_u64(11);

    for digits in [100usize, 10_000] {
        let integer = random_digits(&mut rng, digits);
        let fraction = random_digits(&mut rng, digits);
        let text = format!("-{}.{}", integer, fraction);

        group.bench_with_input(BenchmarkId::new("parse", digits), &text, |b, text| {
            b.iter(|| black_box(text.parse::<BigDecimal>().unwrap()));
        });

        let value: BigDecimal = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("format", digits), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_strategies,
    benchmark_dispatch,
    benchmark_unbalanced,
    benchmark_text
);
criterion_main!(benches);
