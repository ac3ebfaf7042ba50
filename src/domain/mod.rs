// ============================================================================
// Domain Module
// Kernel configuration and the strategy vocabulary
// ============================================================================

pub mod config;

pub use config::{KernelConfig, MultiplicationStrategy};
