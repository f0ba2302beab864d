// ============================================================================
// Background Executor
// Runs one calculation at a time off the caller's thread
// ============================================================================

use super::calculator::Calculator;
use super::errors::{CalculatorError, CalculatorResult};
use crate::domain::{CalculationRequest, JobId, OperationReport};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Runs calculations on a dedicated worker thread so callers stay responsive.
///
/// At most one job runs at a time; submitting while a job is in flight fails
/// with `Busy`. Results are delivered through a [`JobHandle`]. A job cannot be
/// cancelled: abandoning its handle discards the result once it arrives.
pub struct BackgroundExecutor {
    calculator: Arc<Calculator>,
    busy: Arc<AtomicBool>,
}

/// Clears the busy flag when the worker finishes, even by panicking.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BackgroundExecutor {
    pub fn new(calculator: Arc<Calculator>) -> Self {
        Self {
            calculator,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn calculator(&self) -> &Arc<Calculator> {
        &self.calculator
    }

    /// Check if a job is currently running
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start `request` on a new worker thread
    ///
    /// # Errors
    /// - `Busy` if another job is still running
    /// - `WorkerLost` if the worker thread could not be spawned
    pub fn submit(&self, request: CalculationRequest) -> CalculatorResult<JobHandle> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CalculatorError::Busy);
        }

        let id = JobId::new();
        let (sender, receiver) = channel::bounded(1);
        let calculator = Arc::clone(&self.calculator);
        let guard = BusyGuard(Arc::clone(&self.busy));

        let spawned = thread::Builder::new()
            .name(format!("bignum-job-{}", id))
            .spawn(move || {
                let _guard = guard;
                let result = calculator.execute_job(id, request);
                // Receiver is gone if the handle was abandoned.
                let _ = sender.send(result);
            });

        if let Err(err) = spawned {
            tracing::warn!(job_id = %id, error = %err, "failed to spawn worker thread");
            return Err(CalculatorError::WorkerLost);
        }

        tracing::debug!(job_id = %id, "job submitted");
        Ok(JobHandle { id, receiver })
    }
}

/// Pending result of a submitted job
#[derive(Debug)]
pub struct JobHandle {
    id: JobId,
    receiver: Receiver<CalculatorResult<OperationReport>>,
}

impl JobHandle {
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Result if the job has finished, without blocking
    pub fn try_result(&self) -> Option<CalculatorResult<OperationReport>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(CalculatorError::WorkerLost)),
        }
    }

    /// Block until the job finishes
    pub fn wait(self) -> CalculatorResult<OperationReport> {
        self.receiver
            .recv()
            .unwrap_or(Err(CalculatorError::WorkerLost))
    }

    /// Block for at most `timeout`; `None` if the job is still running
    pub fn wait_timeout(&self, timeout: Duration) -> Option<CalculatorResult<OperationReport>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(CalculatorError::WorkerLost)),
        }
    }

    /// Stop waiting for the job. The worker runs to completion and its result
    /// is dropped.
    pub fn abandon(self) {
        tracing::debug!(job_id = %self.id, "job abandoned");
    }
}

/// Run `request` on tokio's blocking pool
///
/// # Errors
/// Returns the calculation error, or `WorkerLost` if the blocking task
/// panicked or was cancelled.
#[cfg(feature = "async")]
pub async fn execute_async(
    calculator: Arc<Calculator>,
    request: CalculationRequest,
) -> CalculatorResult<OperationReport> {
    tokio::task::spawn_blocking(move || calculator.execute(request))
        .await
        .map_err(|_| CalculatorError::WorkerLost)?
}
