// ============================================================================
// Calculator
// Operand parsing, caching and dispatch into the numeric engine
// ============================================================================

use super::errors::{CalculatorError, CalculatorResult};
use crate::domain::{
    CalculationRequest, CalculatorConfig, JobId, OperandSlot, Operation, OperationOutcome,
    OperationReport, Timing, Timings,
};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{
    casting_out_nines, is_valid_decimal, BigNum, NumericError, SUPPORTED_EXPONENTS,
};
use crate::utils::{load_operand, save_result};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Parsed operand remembered together with the digits it came from
#[derive(Debug, Clone)]
struct CachedOperand {
    digits: String,
    value: Arc<BigNum>,
}

/// Synchronous front end to the numeric engine.
///
/// Each call to [`execute`](Self::execute) runs to completion on the calling
/// thread. Parsed operands are cached per slot and reused while the operand
/// digits stay the same, so repeated operations on large inputs skip the
/// quadratic decimal parse.
pub struct Calculator {
    config: CalculatorConfig,

    /// Event handler for progress and result events
    event_handler: Arc<dyn EventHandler>,

    /// Last parsed value per operand slot
    operand_cache: Mutex<[Option<CachedOperand>; 2]>,
}

/// Keep only ASCII digits; separators, whitespace and signs are dropped.
pub fn sanitize_operand(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[inline]
fn slot_index(slot: OperandSlot) -> usize {
    match slot {
        OperandSlot::A => 0,
        OperandSlot::B => 1,
    }
}

fn parsed_operand(
    parsed: &[Option<Arc<BigNum>>; 2],
    slot: OperandSlot,
) -> CalculatorResult<&BigNum> {
    parsed[slot_index(slot)]
        .as_deref()
        .ok_or(CalculatorError::EmptyOperand(slot))
}

fn format_timed(value: &BigNum) -> (String, Duration) {
    let started = Instant::now();
    let digits = value.to_decimal();
    (digits, started.elapsed())
}

impl Calculator {
    /// Create a calculator
    ///
    /// # Errors
    /// Returns `Config` if the configuration does not validate.
    pub fn new(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> CalculatorResult<Self> {
        config.validate().map_err(CalculatorError::Config)?;
        Ok(Self {
            config,
            event_handler,
            operand_cache: Mutex::new([None, None]),
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Forget all cached operands
    pub fn invalidate_cache(&self) {
        *self.operand_cache.lock() = [None, None];
    }

    /// Check if the cache holds a value parsed from exactly `digits`
    pub fn is_cached(&self, slot: OperandSlot, digits: &str) -> bool {
        self.operand_cache.lock()[slot_index(slot)]
            .as_ref()
            .is_some_and(|cached| cached.digits == digits)
    }

    /// Load both operands from the configured files
    ///
    /// # Errors
    /// Returns `Io` if either file is unreadable or holds no valid number.
    pub fn load_operands(&self) -> CalculatorResult<(String, String)> {
        let a = load_operand(&self.config.operand_a_path)?;
        let b = load_operand(&self.config.operand_b_path)?;
        Ok((a, b))
    }

    /// Write two random operands of the configured size to the operand files
    ///
    /// # Errors
    /// Returns `Io` if either file cannot be written.
    #[cfg(feature = "rand")]
    pub fn generate_operands(&self) -> CalculatorResult<(String, String)> {
        crate::utils::generate_operand_files(
            &self.config.operand_a_path,
            &self.config.operand_b_path,
            self.config.random_operand_bytes,
        )
    }

    /// Run one calculation under a fresh job id
    pub fn execute(&self, request: CalculationRequest) -> CalculatorResult<OperationReport> {
        self.execute_job(JobId::new(), request)
    }

    /// Run one calculation under the given job id
    ///
    /// Validates the operands the operation needs, parses them (or reuses the
    /// cache), runs the operation, formats the result and, if configured,
    /// writes it to the output file. A failed write is recorded in the report
    /// but does not fail the calculation.
    ///
    /// # Errors
    /// - `EmptyOperand` / `InvalidOperand` for unusable operand text
    /// - `Numeric` for division by zero or an unsupported exponent
    pub fn execute_job(
        &self,
        job_id: JobId,
        request: CalculationRequest,
    ) -> CalculatorResult<OperationReport> {
        let started = Instant::now();
        let mut events = vec![CalculationEvent::CalculationStarted {
            job_id,
            operation: request.operation,
            timestamp: Utc::now(),
        }];

        let result = self.run(job_id, &request, &mut events);
        match &result {
            Ok(report) => {
                events.push(CalculationEvent::CalculationCompleted {
                    job_id,
                    operation: report.operation,
                    elapsed: started.elapsed(),
                    timestamp: Utc::now(),
                });
            },
            Err(err) => {
                tracing::debug!(%job_id, error = %err, "calculation failed");
                events.push(CalculationEvent::CalculationFailed {
                    job_id,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
            },
        }

        self.event_handler.on_events(events);
        result
    }

    fn run(
        &self,
        job_id: JobId,
        request: &CalculationRequest,
        events: &mut Vec<CalculationEvent>,
    ) -> CalculatorResult<OperationReport> {
        let operation = request.operation;

        // Validate every required operand before any expensive work.
        let mut digits: [Option<String>; 2] = [None, None];
        for &slot in operation.required_operands() {
            let cleaned = sanitize_operand(request.operand(slot));
            if cleaned.is_empty() {
                return Err(CalculatorError::EmptyOperand(slot));
            }
            if !is_valid_decimal(&cleaned) {
                return Err(CalculatorError::InvalidOperand(slot));
            }
            digits[slot_index(slot)] = Some(cleaned);
        }

        if let Operation::Power { exponent, .. } = operation {
            if !SUPPORTED_EXPONENTS.contains(&exponent) {
                return Err(NumericError::InvalidExponent(exponent).into());
            }
        }

        let mut timings = Timings::default();
        let mut parsed: [Option<Arc<BigNum>>; 2] = [None, None];
        for slot in OperandSlot::BOTH {
            if let Some(text) = digits[slot_index(slot)].take() {
                let (value, timing) = self.parse_operand(job_id, slot, text, events)?;
                match slot {
                    OperandSlot::A => timings.parse_a = timing,
                    OperandSlot::B => timings.parse_b = timing,
                }
                parsed[slot_index(slot)] = Some(value);
            }
        }
        let operand = |slot: OperandSlot| parsed_operand(&parsed, slot);

        let op_started = Instant::now();
        let mut check = None;
        let outcome = match operation {
            Operation::Add => {
                let (a, b) = (operand(OperandSlot::A)?, operand(OperandSlot::B)?);
                let sum = a + b;
                check = Some(casting_out_nines(a, b, &sum));
                timings.operation = Timing::Measured(op_started.elapsed());
                let (text, elapsed) = format_timed(&sum);
                timings.to_decimal = Timing::Measured(elapsed);
                OperationOutcome::Value(text)
            },
            Operation::Multiply => {
                let product = operand(OperandSlot::A)? * operand(OperandSlot::B)?;
                timings.operation = Timing::Measured(op_started.elapsed());
                let (text, elapsed) = format_timed(&product);
                timings.to_decimal = Timing::Measured(elapsed);
                OperationOutcome::Value(text)
            },
            Operation::DivRem => {
                let (quotient, remainder) =
                    operand(OperandSlot::A)?.div_rem(operand(OperandSlot::B)?)?;
                timings.operation = Timing::Measured(op_started.elapsed());
                let (quotient, q_elapsed) = format_timed(&quotient);
                let (remainder, r_elapsed) = format_timed(&remainder);
                timings.to_decimal = Timing::Measured(q_elapsed + r_elapsed);
                OperationOutcome::DivRem {
                    quotient,
                    remainder,
                }
            },
            Operation::Power { exponent, target } => {
                let power = operand(target)?.pow(exponent)?;
                timings.operation = Timing::Measured(op_started.elapsed());
                let (text, elapsed) = format_timed(&power);
                timings.to_decimal = Timing::Measured(elapsed);
                OperationOutcome::Value(text)
            },
            Operation::PrimalityTest { target } => {
                let prime = operand(target)?.is_prime();
                timings.operation = Timing::Measured(op_started.elapsed());
                OperationOutcome::Primality { prime }
            },
            Operation::Compare => {
                let ordering = operand(OperandSlot::A)?.compare(operand(OperandSlot::B)?);
                timings.operation = Timing::Measured(op_started.elapsed());
                OperationOutcome::Comparison(ordering.into())
            },
        };

        let mut report = OperationReport::new(job_id, operation, outcome, check, timings);
        if self.config.persist_results {
            self.persist(&mut report, events);
        }
        Ok(report)
    }

    fn parse_operand(
        &self,
        job_id: JobId,
        slot: OperandSlot,
        digits: String,
        events: &mut Vec<CalculationEvent>,
    ) -> CalculatorResult<(Arc<BigNum>, Timing)> {
        let index = slot_index(slot);
        if let Some(cached) = &self.operand_cache.lock()[index] {
            if cached.digits == digits {
                tracing::debug!(%job_id, %slot, "operand cache hit");
                events.push(CalculationEvent::OperandCacheHit {
                    job_id,
                    slot,
                    timestamp: Utc::now(),
                });
                return Ok((Arc::clone(&cached.value), Timing::Cached));
            }
        }

        let started = Instant::now();
        let value = Arc::new(BigNum::from_decimal(&digits)?);
        let elapsed = started.elapsed();
        tracing::debug!(
            %job_id,
            %slot,
            digits = digits.len(),
            limbs = value.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "operand parsed"
        );
        events.push(CalculationEvent::OperandParsed {
            job_id,
            slot,
            digits: digits.len(),
            elapsed,
            timestamp: Utc::now(),
        });

        self.operand_cache.lock()[index] = Some(CachedOperand {
            digits,
            value: Arc::clone(&value),
        });
        Ok((value, Timing::Measured(elapsed)))
    }

    fn persist(&self, report: &mut OperationReport, events: &mut Vec<CalculationEvent>) {
        let path = self.config.output_path.clone();
        match save_result(&path, &report.render()) {
            Ok(()) => {
                events.push(CalculationEvent::ResultSaved {
                    job_id: report.id,
                    path: path.clone(),
                    timestamp: Utc::now(),
                });
                report.saved_to = Some(path);
            },
            Err(err) => {
                tracing::warn!(job_id = %report.id, error = %err, "failed to save result");
                events.push(CalculationEvent::ResultSaveFailed {
                    job_id: report.id,
                    path,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                report.save_error = Some(err.to_string());
            },
        }
    }
}
