// ============================================================================
// Arithmetic Engine
// Routes every multiplication through strategy selection and the plan cache
// ============================================================================

use super::transform::TransformPlan;
use super::{karatsuba, schoolbook};
use crate::domain::{KernelConfig, MultiplicationStrategy};
use crate::interfaces::{EventHandler, KernelEvent, NoOpEventHandler};
use crate::numeric::{BigDecimal, BigInteger, Magnitude, NumericError, NumericResult};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of engine counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineStats {
    pub schoolbook: u64,
    pub karatsuba: u64,
    pub transform: u64,
    pub failures: u64,
    pub cached_plans: usize,
}

impl EngineStats {
    /// Completed multiplications over all strategies.
    pub fn total(&self) -> u64 {
        self.schoolbook + self.karatsuba + self.transform
    }

    /// Completed multiplications for one strategy.
    pub fn count(&self, strategy: MultiplicationStrategy) -> u64 {
        match strategy {
            MultiplicationStrategy::Schoolbook => self.schoolbook,
            MultiplicationStrategy::Karatsuba => self.karatsuba,
            MultiplicationStrategy::Transform => self.transform,
        }
    }
}

/// Size-dispatched multiplication engine.
///
/// The engine is shareable between threads: the transform plan cache sits
/// behind a read-write lock and counters are atomic. Products themselves
/// never touch shared state.
pub struct ArithmeticEngine {
    /// Thresholds and limits
    config: KernelConfig,

    /// Event handler for kernel events
    event_handler: Arc<dyn EventHandler>,

    /// Transform plans keyed by log2 of their length
    plans: RwLock<HashMap<u32, Arc<TransformPlan>>>,

    schoolbook_count: AtomicU64,
    karatsuba_count: AtomicU64,
    transform_count: AtomicU64,
    failure_count: AtomicU64,
}

impl ArithmeticEngine {
    /// Create an engine. The configuration is not validated here; use
    /// [`create_from_config`](super::create_from_config) for that.
    pub fn new(config: KernelConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
            plans: RwLock::new(HashMap::new()),
            schoolbook_count: AtomicU64::new(0),
            karatsuba_count: AtomicU64::new(0),
            transform_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
        }
    }

    /// Process-wide engine with the default configuration and no event
    /// handler, used by the operator impls and the C ABI.
    pub fn global() -> &'static ArithmeticEngine {
        static GLOBAL: OnceLock<ArithmeticEngine> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            ArithmeticEngine::new(KernelConfig::default(), Arc::new(NoOpEventHandler))
        })
    }

    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Snapshot of the counters and plan cache size
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            schoolbook: self.schoolbook_count.load(Ordering::Relaxed),
            karatsuba: self.karatsuba_count.load(Ordering::Relaxed),
            transform: self.transform_count.load(Ordering::Relaxed),
            failures: self.failure_count.load(Ordering::Relaxed),
            cached_plans: self.plans.read().len(),
        }
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Exact product of two magnitudes.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the product could need more than
    /// `max_limbs` limbs, or a transform buffer cannot be allocated.
    pub fn multiply_magnitudes(&self, lhs: &Magnitude, rhs: &Magnitude) -> NumericResult<Magnitude> {
        if lhs.is_zero() || rhs.is_zero() {
            return Ok(Magnitude::zero());
        }

        let product_limbs = lhs.len() + rhs.len();
        if product_limbs > self.config.max_limbs {
            return Err(self.fail(NumericError::CapacityExceeded));
        }

        let strategy = self.config.strategy_for(lhs.len(), rhs.len());
        tracing::trace!(
            %strategy,
            lhs_limbs = lhs.len(),
            rhs_limbs = rhs.len(),
            "multiplying"
        );
        self.event_handler.on_event(KernelEvent::MultiplicationStarted {
            strategy,
            lhs_limbs: lhs.len(),
            rhs_limbs: rhs.len(),
            timestamp: Utc::now(),
        });

        let started = Instant::now();
        let limbs = match strategy {
            MultiplicationStrategy::Schoolbook => schoolbook::multiply(lhs.limbs(), rhs.limbs()),
            MultiplicationStrategy::Karatsuba => {
                karatsuba::multiply(lhs.limbs(), rhs.limbs(), self.config.karatsuba_threshold)
            },
            MultiplicationStrategy::Transform => {
                let plan = self.plan_for(product_limbs).map_err(|error| self.fail(error))?;
                plan.convolve(lhs.limbs(), rhs.limbs())
                    .map_err(|error| self.fail(error))?
            },
        };
        let product = Magnitude::from_limbs(limbs);

        self.counter(strategy).fetch_add(1, Ordering::Relaxed);
        self.event_handler.on_event(KernelEvent::MultiplicationCompleted {
            strategy,
            result_limbs: product.len(),
            elapsed: started.elapsed(),
            timestamp: Utc::now(),
        });
        Ok(product)
    }

    /// Exact product of two integers. The sign is the XOR of the operand
    /// signs, or zero when either operand is zero.
    pub fn multiply_integers(&self, lhs: &BigInteger, rhs: &BigInteger) -> NumericResult<BigInteger> {
        let sign = lhs.sign() * rhs.sign();
        let magnitude = self.multiply_magnitudes(lhs.magnitude(), rhs.magnitude())?;
        Ok(BigInteger::from_parts(sign.is_negative(), magnitude))
    }

    /// Exact product of two decimals; the result's scale is the sum of the
    /// operand scales and no digit is ever rounded away.
    ///
    /// # Errors
    /// Returns `ScaleOverflow` if the scales sum past `u64::MAX`, otherwise
    /// as [`multiply_magnitudes`](Self::multiply_magnitudes).
    pub fn multiply_decimals(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> NumericResult<BigDecimal> {
        let scale = lhs
            .scale()
            .checked_add(rhs.scale())
            .ok_or_else(|| self.fail(NumericError::ScaleOverflow))?;
        let sign = lhs.sign() * rhs.sign();
        let magnitude = self.multiply_magnitudes(lhs.magnitude(), rhs.magnitude())?;
        Ok(BigDecimal::from_parts(sign.is_negative(), magnitude, scale))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Cached plan large enough for a product of `product_limbs` limbs.
    fn plan_for(&self, product_limbs: usize) -> NumericResult<Arc<TransformPlan>> {
        let log_len = TransformPlan::log_len_for(product_limbs)?;
        if let Some(plan) = self.plans.read().get(&log_len) {
            return Ok(Arc::clone(plan));
        }

        // Built outside the lock; a concurrent builder may win the insert.
        let plan = Arc::new(TransformPlan::new(log_len)?);
        let mut plans = self.plans.write();
        Ok(Arc::clone(plans.entry(log_len).or_insert(plan)))
    }

    fn counter(&self, strategy: MultiplicationStrategy) -> &AtomicU64 {
        match strategy {
            MultiplicationStrategy::Schoolbook => &self.schoolbook_count,
            MultiplicationStrategy::Karatsuba => &self.karatsuba_count,
            MultiplicationStrategy::Transform => &self.transform_count,
        }
    }

    /// Record a failure and hand the error back for propagation.
    fn fail(&self, error: NumericError) -> NumericError {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
        self.event_handler.on_event(KernelEvent::MultiplicationFailed {
            error,
            timestamp: Utc::now(),
        });
        error
    }
}

impl Default for ArithmeticEngine {
    fn default() -> Self {
        Self::new(KernelConfig::default(), Arc::new(NoOpEventHandler))
    }
}

impl std::fmt::Debug for ArithmeticEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArithmeticEngine")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
