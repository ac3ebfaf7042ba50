// ============================================================================
// Engine Module
// Multiplication kernel and the engine that dispatches to it
// ============================================================================

mod arithmetic_engine;
mod karatsuba;
mod limbs;
mod schoolbook;
mod transform;

pub mod factory;

pub use arithmetic_engine::{ArithmeticEngine, EngineStats};
pub use factory::{create_from_config, EngineBuilder};
pub use transform::{TransformPlan, MAX_LOG_LEN, MODULUS};
