// ============================================================================
// Operation Domain Model
// ============================================================================

use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two operands an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandSlot {
    A,
    B,
}

impl OperandSlot {
    pub const BOTH: [OperandSlot; 2] = [OperandSlot::A, OperandSlot::B];
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSlot::A => write!(f, "A"),
            OperandSlot::B => write!(f, "B"),
        }
    }
}

// ============================================================================
// Operation
// ============================================================================

/// An engine operation over operands A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// A + B, with a casting-out-nines check
    Add,
    /// A · B
    Multiply,
    /// Quotient and remainder of A / B
    DivRem,
    /// target^exponent, exponent in {1, 2, 3}
    Power { exponent: u32, target: OperandSlot },
    /// Trial-division primality of one operand
    PrimalityTest { target: OperandSlot },
    /// Ordering of A relative to B
    Compare,
}

impl Operation {
    /// Human-readable operation name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Multiply => "multiplication",
            Operation::DivRem => "division with remainder",
            Operation::Power { .. } => "exponentiation",
            Operation::PrimalityTest { .. } => "primality test",
            Operation::Compare => "comparison",
        }
    }

    /// Operands that must be present for this operation.
    pub fn required_operands(&self) -> &'static [OperandSlot] {
        match self {
            Operation::Power {
                target: OperandSlot::A,
                ..
            }
            | Operation::PrimalityTest {
                target: OperandSlot::A,
            } => &[OperandSlot::A],
            Operation::Power {
                target: OperandSlot::B,
                ..
            }
            | Operation::PrimalityTest {
                target: OperandSlot::B,
            } => &[OperandSlot::B],
            _ => &OperandSlot::BOTH,
        }
    }

    /// Check if the operation reads the given operand.
    pub fn uses(&self, slot: OperandSlot) -> bool {
        self.required_operands().contains(&slot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Power { exponent, target } => {
                write!(f, "{} ({}^{})", self.name(), target, exponent)
            },
            Operation::PrimalityTest { target } => write!(f, "{} ({})", self.name(), target),
            _ => write!(f, "{}", self.name()),
        }
    }
}

// ============================================================================
// Calculation Request
// ============================================================================

/// Snapshot of the operand texts and the chosen operation.
///
/// Operand texts are raw user input; the calculator keeps only their digits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationRequest {
    pub operand_a: String,
    pub operand_b: String,
    pub operation: Operation,
}

impl CalculationRequest {
    pub fn new(
        operand_a: impl Into<String>,
        operand_b: impl Into<String>,
        operation: Operation,
    ) -> Self {
        Self {
            operand_a: operand_a.into(),
            operand_b: operand_b.into(),
            operation,
        }
    }

    /// Raw text of one operand
    pub fn operand(&self, slot: OperandSlot) -> &str {
        match slot {
            OperandSlot::A => &self.operand_a,
            OperandSlot::B => &self.operand_b,
        }
    }
}
