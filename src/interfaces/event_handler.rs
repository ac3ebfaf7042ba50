// ============================================================================
// Event Handler Interface
// Defines the contract for observing kernel activity
// ============================================================================

use crate::domain::MultiplicationStrategy;
use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the arithmetic engine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelEvent {
    /// A multiplication was dispatched to a strategy
    MultiplicationStarted {
        strategy: MultiplicationStrategy,
        lhs_limbs: usize,
        rhs_limbs: usize,
        timestamp: DateTime<Utc>,
    },

    /// A multiplication produced its result
    MultiplicationCompleted {
        strategy: MultiplicationStrategy,
        result_limbs: usize,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },

    /// A multiplication was abandoned
    MultiplicationFailed {
        error: NumericError,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, metrics, timing harnesses, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a kernel event
    fn on_event(&self, event: KernelEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<KernelEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: KernelEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: KernelEvent) {
        match &event {
            KernelEvent::MultiplicationFailed { error, .. } => {
                tracing::warn!(%error, "multiplication failed");
            },
            _ => tracing::debug!("Arithmetic engine event: {:?}", event),
        }
    }
}
