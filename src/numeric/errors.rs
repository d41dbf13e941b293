// ============================================================================
// Calculator Errors
// Error types reported by the arithmetic engine and its operators
// ============================================================================

use thiserror::Error;

/// Errors that can occur while feeding keys into the processor.
///
/// Overflow is not represented: `f64` arithmetic saturates to infinity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CalculatorError {
    /// The entered digits do not form a number, e.g. `"1-21"`
    #[error("argument unparseable: {0:?} is not a number")]
    ArgumentUnparseable(String),
    /// No argument could be assembled for the operator
    #[error("argument missing: no operand available")]
    ArgumentMissing,
    /// Divisor was exactly zero
    #[error("division by zero")]
    DividedByZero,
    /// Domain error raised by a caller-defined operator
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

/// Result of every key press: the displayed number or a typed error.
pub type CalculatorResult<T = f64> = Result<T, CalculatorError>;
