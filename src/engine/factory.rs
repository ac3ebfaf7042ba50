// ============================================================================
// Engine Factory
// Creates arithmetic engines with validated configuration
// ============================================================================

use crate::domain::{KernelConfig, MultiplicationStrategy};
use crate::engine::ArithmeticEngine;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an arithmetic engine from configuration
///
/// # Arguments
/// * `config` - Kernel thresholds and limits
/// * `event_handler` - Event handler for kernel events
///
/// # Returns
/// * `Result<ArithmeticEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use bigmul::prelude::*;
/// use bigmul::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = KernelConfig::default().with_karatsuba_threshold(32);
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.config().karatsuba_threshold, 32);
/// ```
pub fn create_from_config(
    config: KernelConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<ArithmeticEngine, String> {
    config.validate()?;
    Ok(ArithmeticEngine::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating arithmetic engines with fluent API
///
/// # Example
/// ```
/// use bigmul::prelude::*;
/// use bigmul::engine::factory::EngineBuilder;
/// use std::sync::Arc;
///
/// let engine = EngineBuilder::new()
///     .karatsuba_threshold(24)
///     .transform_threshold(512)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: KernelConfig,
}

impl EngineBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Thresholds
    // ========================================================================

    /// Shorter-operand limb count from which Karatsuba is used
    pub fn karatsuba_threshold(mut self, limbs: usize) -> Self {
        self.config.karatsuba_threshold = limbs;
        self
    }

    /// Shorter-operand limb count from which the transform is used
    pub fn transform_threshold(mut self, limbs: usize) -> Self {
        self.config.transform_threshold = limbs;
        self
    }

    /// Largest limb count a product may have
    pub fn max_limbs(mut self, limbs: usize) -> Self {
        self.config.max_limbs = limbs;
        self
    }

    /// Same limit expressed in decimal digits
    pub fn max_digits(self, digits: usize) -> Self {
        self.max_limbs(digits.div_ceil(crate::numeric::LIMB_DIGITS))
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Always use one strategy, keeping the current size limit
    pub fn force_strategy(mut self, strategy: MultiplicationStrategy) -> Self {
        let max_limbs = self.config.max_limbs;
        self.config = KernelConfig::forcing(strategy).with_max_limbs(max_limbs);
        self
    }

    /// Schoolbook multiplication only
    pub fn schoolbook_only() -> Self {
        Self::from_config(KernelConfig::schoolbook_only())
    }

    /// Karatsuba down to its smallest base case
    pub fn karatsuba_only() -> Self {
        Self::from_config(KernelConfig::karatsuba_only())
    }

    /// Transform for every non-zero product
    pub fn transform_only() -> Self {
        Self::from_config(KernelConfig::transform_only())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<ArithmeticEngine, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &KernelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_default_engine() {
        let engine = create_from_config(KernelConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(*engine.config(), KernelConfig::default());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = KernelConfig::new(1, 100);
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let engine = EngineBuilder::new()
            .karatsuba_threshold(16)
            .transform_threshold(256)
            .max_digits(1_000_001)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        let config = engine.config();
        assert_eq!(config.karatsuba_threshold, 16);
        assert_eq!(config.transform_threshold, 256);
        assert_eq!(config.max_limbs, 250_001);
    }

    #[test]
    fn test_force_strategy_keeps_limit() {
        let builder = EngineBuilder::new()
            .max_limbs(4096)
            .force_strategy(MultiplicationStrategy::Transform);
        assert_eq!(builder.get_config().max_limbs, 4096);
        assert_eq!(
            builder.get_config().strategy_for(5, 5),
            MultiplicationStrategy::Transform
        );
    }

    #[test]
    fn test_preset_builders() {
        for (builder, strategy) in [
            (EngineBuilder::schoolbook_only(), MultiplicationStrategy::Schoolbook),
            (EngineBuilder::karatsuba_only(), MultiplicationStrategy::Karatsuba),
            (EngineBuilder::transform_only(), MultiplicationStrategy::Transform),
        ] {
            let engine = builder.build(Arc::new(NoOpEventHandler)).unwrap();
            assert_eq!(engine.config().strategy_for(64, 64), strategy);
        }
    }
}
