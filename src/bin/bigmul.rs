// ============================================================================
// bigmul CLI
// Multiply two numbers given on the command line and print the exact product
// ============================================================================

use bigmul::prelude::*;
use clap::{ArgAction, Parser, ValueEnum};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

/// Mantissa digits printed by a bare `--scientific`.
const DEFAULT_PRECISION: usize = 6;

#[derive(Parser)]
#[command(name = "bigmul")]
#[command(about = "Exact arbitrary-precision multiplication")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Multiplier, e.g. 123, -4.5 or 1.017e+01
    lhs: String,

    /// Multiplicand
    rhs: String,

    /// Print in scientific notation; N truncates the mantissa to N fractional digits (default 6)
    #[arg(short, long, value_name = "N", num_args = 0..=1)]
    scientific: Option<Option<usize>>,

    /// Multiplication strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    strategy: StrategyArg,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Pick by operand size
    Auto,
    Schoolbook,
    Karatsuba,
    Transform,
}

impl StrategyArg {
    fn forced(self) -> Option<MultiplicationStrategy> {
        match self {
            StrategyArg::Auto => None,
            StrategyArg::Schoolbook => Some(MultiplicationStrategy::Schoolbook),
            StrategyArg::Karatsuba => Some(MultiplicationStrategy::Karatsuba),
            StrategyArg::Transform => Some(MultiplicationStrategy::Transform),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_operand(text: &str) -> Result<BigDecimal, String> {
    BigDecimal::from_scientific_str(text).map_err(|e| format!("cannot parse '{}': {}", text, e))
}

fn render(value: &BigDecimal, scientific: Option<Option<usize>>) -> String {
    match scientific {
        None => value.to_string(),
        Some(precision) => format!("{:.*e}", precision.unwrap_or(DEFAULT_PRECISION), value),
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let lhs = parse_operand(&cli.lhs)?;
    let rhs = parse_operand(&cli.rhs)?;

    let mut builder = EngineBuilder::new();
    if let Some(strategy) = cli.strategy.forced() {
        builder = builder.force_strategy(strategy);
    }
    let engine = builder.build(Arc::new(LoggingEventHandler))?;

    let product = engine
        .multiply_decimals(&lhs, &rhs)
        .map_err(|e| e.to_string())?;
    tracing::debug!(stats = ?engine.stats(), "done");

    Ok(format!(
        "{} * {} = {}",
        render(&lhs, cli.scientific),
        render(&rhs, cli.scientific),
        render(&product, cli.scientific)
    ))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        },
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        parse_operand(text).unwrap()
    }

    #[test]
    fn test_render_positional() {
        assert_eq!(render(&dec("1.50"), None), "1.5");
        assert_eq!(render(&dec("1.017e+01"), None), "10.17");
    }

    #[test]
    fn test_bare_scientific_uses_default_precision() {
        let value = dec("3.14159265358979");
        assert_eq!(render(&value, Some(None)), "3.141592e+0");
        assert_eq!(render(&value, Some(Some(2))), "3.14e+0");
        assert_eq!(render(&dec("12"), Some(None)), "1.2e+1");
    }

    #[test]
    fn test_cli_scientific_flag() {
        let cli = Cli::try_parse_from(["bigmul", "1.5", "-2.25", "-s"]).unwrap();
        assert_eq!(cli.scientific, Some(None));
        assert_eq!(run(&cli).unwrap(), "1.5e+0 * -2.25e+0 = -3.375e+0");

        let cli = Cli::try_parse_from(["bigmul", "123", "456"]).unwrap();
        assert_eq!(run(&cli).unwrap(), "123 * 456 = 56088");
    }
}
