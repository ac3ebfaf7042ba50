// ============================================================================
// Kernel Configuration
// Size thresholds and limits that drive multiplication strategy selection
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default shorter-operand limb count at which Karatsuba takes over.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 40;

/// Default shorter-operand limb count at which the transform takes over.
pub const DEFAULT_TRANSFORM_THRESHOLD: usize = 1_024;

/// Smallest Karatsuba threshold for which the recursion always shrinks.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

/// Default cap on the limb count of any single value (~4.3 billion digits).
pub const DEFAULT_MAX_LIMBS: usize = 1 << 30;

/// Hard cap on `max_limbs`; keeps every product within the transform's
/// largest supported length.
pub const MAX_LIMBS_LIMIT: usize = 1 << 31;

// ============================================================================
// Multiplication Strategy
// ============================================================================

/// The closed set of multiplication algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MultiplicationStrategy {
    /// O(n·m) long multiplication
    Schoolbook,
    /// Divide-and-conquer with three sub-products, O(n^1.585)
    Karatsuba,
    /// Number-theoretic transform convolution, O(n log n)
    Transform,
}

impl MultiplicationStrategy {
    /// All strategies, cheapest-for-small-operands first.
    pub const ALL: [MultiplicationStrategy; 3] = [
        MultiplicationStrategy::Schoolbook,
        MultiplicationStrategy::Karatsuba,
        MultiplicationStrategy::Transform,
    ];

    /// Pick the strategy for operands of the given limb counts.
    ///
    /// Only the shorter operand matters: a tiny operand times a huge one is
    /// cheapest as a single schoolbook pass.
    #[inline]
    pub fn select(lhs_limbs: usize, rhs_limbs: usize, config: &KernelConfig) -> Self {
        let shorter = lhs_limbs.min(rhs_limbs);
        if shorter >= config.transform_threshold {
            MultiplicationStrategy::Transform
        } else if shorter >= config.karatsuba_threshold {
            MultiplicationStrategy::Karatsuba
        } else {
            MultiplicationStrategy::Schoolbook
        }
    }

    /// Stable name for logging and metrics.
    pub const fn name(self) -> &'static str {
        match self {
            MultiplicationStrategy::Schoolbook => "schoolbook",
            MultiplicationStrategy::Karatsuba => "karatsuba",
            MultiplicationStrategy::Transform => "transform",
        }
    }
}

impl std::fmt::Display for MultiplicationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Kernel Configuration
// ============================================================================

/// Configuration for the multiplication kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelConfig {
    /// Shorter-operand limb count from which Karatsuba is used
    pub karatsuba_threshold: usize,

    /// Shorter-operand limb count from which the transform is used
    pub transform_threshold: usize,

    /// Largest limb count a product may have
    pub max_limbs: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            transform_threshold: DEFAULT_TRANSFORM_THRESHOLD,
            max_limbs: DEFAULT_MAX_LIMBS,
        }
    }
}

impl KernelConfig {
    /// Create a configuration with explicit thresholds and the default limit
    pub fn new(karatsuba_threshold: usize, transform_threshold: usize) -> Self {
        Self {
            karatsuba_threshold,
            transform_threshold,
            max_limbs: DEFAULT_MAX_LIMBS,
        }
    }

    /// Builder method: Set the Karatsuba threshold
    pub fn with_karatsuba_threshold(mut self, limbs: usize) -> Self {
        self.karatsuba_threshold = limbs;
        self
    }

    /// Builder method: Set the transform threshold
    pub fn with_transform_threshold(mut self, limbs: usize) -> Self {
        self.transform_threshold = limbs;
        self
    }

    /// Builder method: Set the product size limit
    pub fn with_max_limbs(mut self, limbs: usize) -> Self {
        self.max_limbs = limbs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.karatsuba_threshold < MIN_KARATSUBA_THRESHOLD {
            return Err(format!(
                "Karatsuba threshold must be at least {}",
                MIN_KARATSUBA_THRESHOLD
            ));
        }

        if self.transform_threshold == 0 {
            return Err("Transform threshold must be positive".to_string());
        }

        if self.max_limbs == 0 {
            return Err("Max limbs must be positive".to_string());
        }

        if self.max_limbs > MAX_LIMBS_LIMIT {
            return Err(format!("Max limbs cannot exceed {}", MAX_LIMBS_LIMIT));
        }

        Ok(())
    }

    /// The strategy this configuration picks for the given operand sizes.
    #[inline]
    pub fn strategy_for(&self, lhs_limbs: usize, rhs_limbs: usize) -> MultiplicationStrategy {
        MultiplicationStrategy::select(lhs_limbs, rhs_limbs, self)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl KernelConfig {
    /// Never leave schoolbook multiplication
    pub fn schoolbook_only() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// Karatsuba down to its smallest base case, never the transform
    pub fn karatsuba_only() -> Self {
        Self::new(MIN_KARATSUBA_THRESHOLD, usize::MAX)
    }

    /// Transform for every non-zero product
    pub fn transform_only() -> Self {
        Self::new(usize::MAX, 1)
    }

    /// Preset that always selects `strategy` (for tests and comparisons)
    pub fn forcing(strategy: MultiplicationStrategy) -> Self {
        match strategy {
            MultiplicationStrategy::Schoolbook => Self::schoolbook_only(),
            MultiplicationStrategy::Karatsuba => Self::karatsuba_only(),
            MultiplicationStrategy::Transform => Self::transform_only(),
        }
    }
}
