// ============================================================================
// Processor
// Register machine turning key presses into numeric results
// ============================================================================

use crate::domain::{FunctionKey, NumpadKey, OperatorKey};
use crate::numeric::{CalculatorError, CalculatorResult, DigitBuffer};
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operands for one evaluation: the accumulator and the entered number.
type Arguments = ArrayVec<f64, 2>;

/// Arithmetic engine state.
///
/// Four registers drive every result:
/// - `digits`: keys entered since the last operator or function key
/// - `pending_operator`: operator still waiting for its last operand
/// - `last_answer`: value of the last successful `=`, 0 by default
/// - `accumulator`: running value of a chained expression such as `1+2+`
///
/// The processor is not synchronized. Drive one instance from one sequence of
/// events and wrap it in a lock if several callers share it.
#[derive(Debug, Default)]
pub struct Processor {
    digits: DigitBuffer,
    pending_operator: Option<OperatorKey>,
    last_answer: f64,
    accumulator: Option<f64>,
}

/// Read-only copy of the registers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessorSnapshot {
    pub pending_literal: String,
    pub pending_operator: Option<String>,
    pub last_answer: f64,
    pub accumulator: Option<f64>,
}

impl Processor {
    /// Create a processor with every register empty
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Key events
    // ========================================================================

    /// Enter a digit or the separator and preview the number typed so far.
    ///
    /// A second separator is ignored. A malformed digit token stays in the
    /// buffer and yields `ArgumentUnparseable` until the buffer is consumed.
    pub fn digit_key_pressed(&mut self, key: NumpadKey) -> CalculatorResult {
        if !self.digits.push(key) {
            tracing::trace!("Ignoring repeated separator");
        }

        let preview = self.digits.parse();
        tracing::trace!(literal = %self.digits.literal(), ?preview, "Digit entered");
        preview
    }

    /// Complete the pending operator, then apply (or defer) `key`.
    ///
    /// A failure of the pending operator is returned before `key` is looked at.
    pub fn operator_key_pressed(&mut self, key: &OperatorKey) -> CalculatorResult {
        self.evaluate_pending()?;
        self.evaluate(Some(key.clone()))
    }

    /// Clear every register (result 0) or evaluate the equation
    pub fn function_key_pressed(&mut self, key: FunctionKey) -> CalculatorResult {
        match key {
            FunctionKey::Clear => {
                self.clear_all();
                Ok(0.0)
            },
            FunctionKey::Equal => self.handle_equal(),
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Literal of the digits entered since the last operator
    pub fn pending_literal(&self) -> String {
        self.digits.literal()
    }

    /// Operator still waiting for its last operand
    pub fn pending_operator(&self) -> Option<&OperatorKey> {
        self.pending_operator.as_ref()
    }

    /// Value of the last successful `=`
    pub fn last_answer(&self) -> f64 {
        self.last_answer
    }

    /// Running value of the current chained expression
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Copy every register into a `ProcessorSnapshot`
    pub fn snapshot(&self) -> ProcessorSnapshot {
        ProcessorSnapshot {
            pending_literal: self.digits.literal(),
            pending_operator: self.pending_operator.as_ref().map(|op| op.name().to_string()),
            last_answer: self.last_answer,
            accumulator: self.accumulator,
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn clear_all(&mut self) {
        self.digits.clear();
        self.pending_operator = None;
        self.last_answer = 0.0;
        self.accumulator = None;
        tracing::debug!("Processor cleared");
    }

    fn handle_equal(&mut self) -> CalculatorResult {
        let result = self.evaluate_pending();
        if let Ok(answer) = &result {
            self.last_answer = *answer;
        }

        self.accumulator = None;
        self.pending_operator = None;

        tracing::debug!(?result, "Equation evaluated");
        result
    }

    /// Run the stored operator. On failure it stays stored so that the user
    /// can enter a new operand and retry.
    fn evaluate_pending(&mut self) -> CalculatorResult {
        let pending = self.pending_operator.take();
        let result = self.evaluate(pending.clone());
        if result.is_err() {
            self.pending_operator = pending;
        }
        result
    }

    /// Earliest first: accumulator, entered number, else the last answer.
    /// Always consumes the digit buffer.
    fn assemble_arguments(&mut self) -> Arguments {
        let mut args = Arguments::new();

        if let Some(value) = self.accumulator {
            args.push(value);
        }
        // Nothing typed since the last operator is not an error
        if let Ok(value) = self.digits.parse() {
            args.push(value);
        }
        if args.is_empty() {
            args.push(self.last_answer);
        }

        self.digits.clear();
        args
    }

    fn evaluate(&mut self, operator: Option<OperatorKey>) -> CalculatorResult {
        let args = self.assemble_arguments();
        let Some(&first) = args.first() else {
            return Err(CalculatorError::ArgumentMissing);
        };

        // No operator: the entered number starts a new expression
        let Some(operator) = operator else {
            self.accumulator = Some(first);
            return Ok(first);
        };

        if !operator.is_satisfied_by(args.len()) {
            tracing::debug!(
                "Deferring operator {} with {} of {} operands",
                operator.name(),
                args.len(),
                operator.arity().operand_count()
            );
            self.accumulator = Some(first);
            self.pending_operator = Some(operator);
            return Ok(first);
        }

        match operator.apply(&args) {
            Ok(value) => {
                tracing::debug!("Applied operator {} to {:?} = {}", operator.name(), args, value);
                self.accumulator = Some(value);
                Ok(value)
            },
            Err(error) => {
                tracing::warn!("Operator {} failed on {:?}: {}", operator.name(), args, error);
                Err(error)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AngleUnit, Arity};
    use crate::engine::operators::{add, cos, divide, multiply, sin, subtract};

    fn digits(processor: &mut Processor, keys: &[i64]) {
        for key in keys {
            let _ = processor.digit_key_pressed(NumpadKey::Digit(*key));
        }
    }

    fn separator(processor: &mut Processor) {
        let _ = processor.digit_key_pressed(NumpadKey::Separator);
    }

    fn assert_close(result: CalculatorResult, expected: f64) {
        let value = result.expect("expected a numeric result");
        assert!(
            (value - expected).abs() < 1e-8,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn test_digit_preview() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1, 1]);
        separator(&mut processor);
        digits(&mut processor, &[0]);
        let result = processor.digit_key_pressed(NumpadKey::Digit(1));

        assert_eq!(result, Ok(11.01));
        assert_eq!(processor.accumulator(), None);
        assert!(processor.pending_operator().is_none());
    }

    #[test]
    fn test_repeated_separator_is_ignored() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        separator(&mut processor);
        let result = processor.digit_key_pressed(NumpadKey::Separator);

        assert_eq!(result, Ok(1.0));
        assert_eq!(processor.pending_literal(), "1.");
    }

    #[test]
    fn test_leading_separator() {
        let mut processor = Processor::new();
        let result = processor.digit_key_pressed(NumpadKey::Separator);
        assert_eq!(
            result,
            Err(CalculatorError::ArgumentUnparseable(".".to_string()))
        );

        assert_eq!(processor.digit_key_pressed(NumpadKey::Digit(1)), Ok(0.1));
        assert_eq!(processor.pending_literal(), ".1");
    }

    #[test]
    fn test_leading_zeros() {
        let mut processor = Processor::new();
        assert_eq!(processor.digit_key_pressed(NumpadKey::Digit(0)), Ok(0.0));
        assert_eq!(processor.digit_key_pressed(NumpadKey::Digit(0)), Ok(0.0));
        assert_eq!(processor.digit_key_pressed(NumpadKey::Digit(1)), Ok(1.0));
        assert_eq!(processor.pending_literal(), "001");
    }

    #[test]
    fn test_unparseable_digit_keeps_token() {
        let mut processor = Processor::new();
        digits(&mut processor, &[11]);
        let result = processor.digit_key_pressed(NumpadKey::Digit(-21));

        assert_eq!(
            result,
            Err(CalculatorError::ArgumentUnparseable("11-21".to_string()))
        );
        assert_eq!(processor.pending_literal(), "11-21");
    }

    #[test]
    fn test_unparseable_entry_is_skipped_by_operator() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1, -2]);

        // Falls back to the last answer
        assert_eq!(processor.operator_key_pressed(&add()), Ok(0.0));
        assert_eq!(processor.pending_literal(), "");
    }

    #[test]
    fn test_clear_resets_registers() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&add()).unwrap();
        digits(&mut processor, &[2]);
        processor.function_key_pressed(FunctionKey::Equal).unwrap();
        digits(&mut processor, &[5]);

        assert_eq!(processor.function_key_pressed(FunctionKey::Clear), Ok(0.0));
        assert_eq!(
            processor.snapshot(),
            ProcessorSnapshot {
                pending_literal: String::new(),
                pending_operator: None,
                last_answer: 0.0,
                accumulator: None,
            }
        );
    }

    #[test]
    fn test_equal_key() {
        let mut processor = Processor::new();
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(0.0));

        digits(&mut processor, &[1]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(1.0));

        processor.operator_key_pressed(&add()).unwrap();
        digits(&mut processor, &[2]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(3.0));
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(3.0));
        assert_eq!(processor.last_answer(), 3.0);

        digits(&mut processor, &[2]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(2.0));
    }

    #[test]
    fn test_operator_first_uses_last_answer() {
        let mut processor = Processor::new();
        assert_eq!(processor.operator_key_pressed(&add()), Ok(0.0));
        digits(&mut processor, &[1]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(1.0));
    }

    #[test]
    fn test_chained_operators() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        assert_eq!(processor.operator_key_pressed(&add()), Ok(1.0));
        digits(&mut processor, &[2]);
        assert_eq!(processor.operator_key_pressed(&subtract()), Ok(3.0));
        digits(&mut processor, &[4]);
        assert_eq!(processor.operator_key_pressed(&multiply()), Ok(-1.0));
        digits(&mut processor, &[4]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(-4.0));

        assert_eq!(processor.operator_key_pressed(&add()), Ok(-4.0));
        assert_eq!(processor.operator_key_pressed(&multiply()), Ok(-4.0));
        assert_eq!(processor.pending_operator().map(OperatorKey::name), Some("*"));
    }

    #[test]
    fn test_direct_equal_after_operator() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1, 1]);
        assert_eq!(processor.operator_key_pressed(&add()), Ok(11.0));
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(11.0));
    }

    #[test]
    fn test_add_with_fraction() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1, 1]);
        assert_eq!(processor.operator_key_pressed(&add()), Ok(11.0));
        digits(&mut processor, &[2, 2]);
        separator(&mut processor);
        digits(&mut processor, &[3, 3]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(33.33));
    }

    #[test]
    fn test_applied_operator_is_no_longer_pending() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&add()).unwrap();
        assert_eq!(processor.pending_operator().map(OperatorKey::name), Some("+"));

        digits(&mut processor, &[2]);
        processor.operator_key_pressed(&sin(AngleUnit::Degrees)).unwrap();
        assert!(processor.pending_operator().is_none());
        assert_close(Ok(processor.accumulator().unwrap()), 3.0_f64.to_radians().sin());
    }

    #[test]
    fn test_divide_by_zero_on_equal() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&divide()).unwrap();
        digits(&mut processor, &[0]);

        assert_eq!(
            processor.function_key_pressed(FunctionKey::Equal),
            Err(CalculatorError::DividedByZero)
        );
        assert_eq!(processor.last_answer(), 0.0);
        assert_eq!(processor.accumulator(), None);
        assert!(processor.pending_operator().is_none());
    }

    #[test]
    fn test_divide_by_zero_short_circuits_operator() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&multiply()).unwrap();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&divide()).unwrap();
        digits(&mut processor, &[0]);

        assert_eq!(
            processor.operator_key_pressed(&add()),
            Err(CalculatorError::DividedByZero)
        );
        // Accumulator keeps its value from before the failure
        assert_eq!(processor.accumulator(), Some(1.0));
        assert_eq!(processor.pending_operator().map(OperatorKey::name), Some("/"));
    }

    #[test]
    fn test_recover_after_divide_by_zero() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&divide()).unwrap();
        digits(&mut processor, &[0]);
        assert!(processor.operator_key_pressed(&add()).is_err());

        digits(&mut processor, &[2]);
        assert_eq!(processor.operator_key_pressed(&add()), Ok(0.5));
        digits(&mut processor, &[1]);
        assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(1.5));
    }

    #[test]
    fn test_sin_and_cos_in_degrees() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1, 1]);
        assert_close(processor.operator_key_pressed(&sin(AngleUnit::Degrees)), 0.190_808_995_37);
        assert_close(processor.function_key_pressed(FunctionKey::Equal), 0.190_808_995_37);

        processor.function_key_pressed(FunctionKey::Clear).unwrap();
        digits(&mut processor, &[1, 1]);
        assert_close(processor.operator_key_pressed(&cos(AngleUnit::Degrees)), 0.981_627_183_44);
    }

    #[test]
    fn test_unary_after_binary_keeps_binary_pending() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&add()).unwrap();
        processor.operator_key_pressed(&sin(AngleUnit::Degrees)).unwrap();

        assert_close(processor.function_key_pressed(FunctionKey::Equal), 0.017_452_406_43);
    }

    #[test]
    fn test_unary_on_completed_binary() {
        let mut processor = Processor::new();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&add()).unwrap();
        digits(&mut processor, &[1]);
        processor.operator_key_pressed(&cos(AngleUnit::Degrees)).unwrap();

        assert_close(processor.function_key_pressed(FunctionKey::Equal), 0.999_390_827_01);
    }

    #[test]
    fn test_custom_operator_error_propagates() {
        let sqrt = OperatorKey::new("sqrt", Arity::Unary, |args| {
            if args[0] < 0.0 {
                return Err(CalculatorError::OperationFailed("negative root".to_string()));
            }
            Ok(args[0].sqrt())
        });

        let mut processor = Processor::new();
        digits(&mut processor, &[9]);
        assert_eq!(processor.operator_key_pressed(&sqrt), Ok(3.0));

        processor.function_key_pressed(FunctionKey::Clear).unwrap();
        digits(&mut processor, &[-4]);
        assert_eq!(
            processor.operator_key_pressed(&sqrt),
            Err(CalculatorError::OperationFailed("negative root".to_string()))
        );
        // The failed unary operator is not stored
        assert!(processor.pending_operator().is_none());
    }
}
