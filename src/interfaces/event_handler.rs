// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::domain::{JobId, OperandSlot, Operation};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Request accepted, operands about to be parsed
    CalculationStarted {
        job_id: JobId,
        operation: Operation,
        timestamp: DateTime<Utc>,
    },

    /// Operand text converted to a value
    OperandParsed {
        job_id: JobId,
        slot: OperandSlot,
        digits: usize,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },

    /// Operand text unchanged since the last parse; cached value reused
    OperandCacheHit {
        job_id: JobId,
        slot: OperandSlot,
        timestamp: DateTime<Utc>,
    },

    /// Operation finished and its result formatted
    CalculationCompleted {
        job_id: JobId,
        operation: Operation,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },

    /// Request rejected or operation failed; no result was produced
    CalculationFailed {
        job_id: JobId,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Rendered result written to disk
    ResultSaved {
        job_id: JobId,
        path: PathBuf,
        timestamp: DateTime<Utc>,
    },

    /// Rendered result could not be written
    ResultSaveFailed {
        job_id: JobId,
        path: PathBuf,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    /// Job the event belongs to
    pub fn job_id(&self) -> JobId {
        match self {
            CalculationEvent::CalculationStarted { job_id, .. }
            | CalculationEvent::OperandParsed { job_id, .. }
            | CalculationEvent::OperandCacheHit { job_id, .. }
            | CalculationEvent::CalculationCompleted { job_id, .. }
            | CalculationEvent::CalculationFailed { job_id, .. }
            | CalculationEvent::ResultSaved { job_id, .. }
            | CalculationEvent::ResultSaveFailed { job_id, .. } => *job_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, progress display, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
