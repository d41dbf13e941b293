// ============================================================================
// Display Unit Interface
// Defines the contract for rendering calculator output
// ============================================================================

use crate::domain::{CustomizedKey, OperatorKey};
use crate::numeric::CalculatorResult;
use parking_lot::Mutex;

/// Receives everything the circuit board produces.
/// Implementations decide how numbers and errors are rendered.
pub trait DisplayUnit: Send + Sync {
    /// Operators this display wants on the keyboard
    fn enabled_operator_keys(&self) -> Vec<OperatorKey>;

    /// Optional extension key. None installs a disabled placeholder
    fn customized_key(&self) -> Option<CustomizedKey> {
        None
    }

    /// A digit preview or an operator result is ready
    fn numeric_output_delivered(&self, result: &CalculatorResult);

    /// The equal key completed an equation
    fn equation_evaluated(&self, result: &CalculatorResult);

    /// The clear key was pressed or a new display was installed
    fn reset(&self);

    /// The customized key was pressed. The display owns any failure here
    fn customized_key_pressed(&self) {}
}

/// Display that discards everything
pub struct NoOpDisplayUnit;

impl DisplayUnit for NoOpDisplayUnit {
    fn enabled_operator_keys(&self) -> Vec<OperatorKey> {
        Vec::new()
    }

    fn numeric_output_delivered(&self, _result: &CalculatorResult) {
        // Do nothing
    }

    fn equation_evaluated(&self, _result: &CalculatorResult) {
        // Do nothing
    }

    fn reset(&self) {}
}

/// Logging display unit
pub struct LoggingDisplayUnit;

impl DisplayUnit for LoggingDisplayUnit {
    fn enabled_operator_keys(&self) -> Vec<OperatorKey> {
        Vec::new()
    }

    fn numeric_output_delivered(&self, result: &CalculatorResult) {
        tracing::debug!("Calculator output: {:?}", result);
    }

    fn equation_evaluated(&self, result: &CalculatorResult) {
        tracing::debug!("Calculator equation: {:?}", result);
    }

    fn reset(&self) {
        tracing::debug!("Calculator display reset");
    }

    fn customized_key_pressed(&self) {
        tracing::debug!("Calculator customized key pressed");
    }
}

// ============================================================================
// Memory Display
// ============================================================================

#[derive(Debug, Default)]
struct Screen {
    readout: Option<CalculatorResult>,
    equations: Vec<CalculatorResult>,
    resets: usize,
    customized_presses: usize,
}

/// Headless display keeping the current readout and every evaluated equation
#[derive(Default)]
pub struct MemoryDisplayUnit {
    operators: Vec<OperatorKey>,
    customized_key: Option<CustomizedKey>,
    screen: Mutex<Screen>,
}

impl MemoryDisplayUnit {
    pub fn new(operators: Vec<OperatorKey>) -> Self {
        Self {
            operators,
            ..Self::default()
        }
    }

    pub fn with_customized_key(mut self, key: CustomizedKey) -> Self {
        self.customized_key = Some(key);
        self
    }

    /// Result currently shown, None after a reset
    pub fn readout(&self) -> Option<CalculatorResult> {
        self.screen.lock().readout.clone()
    }

    /// Every result delivered by the equal key, oldest first
    pub fn equations(&self) -> Vec<CalculatorResult> {
        self.screen.lock().equations.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.screen.lock().resets
    }

    pub fn customized_presses(&self) -> usize {
        self.screen.lock().customized_presses
    }
}

impl DisplayUnit for MemoryDisplayUnit {
    fn enabled_operator_keys(&self) -> Vec<OperatorKey> {
        self.operators.clone()
    }

    fn customized_key(&self) -> Option<CustomizedKey> {
        self.customized_key.clone()
    }

    fn numeric_output_delivered(&self, result: &CalculatorResult) {
        self.screen.lock().readout = Some(result.clone());
    }

    fn equation_evaluated(&self, result: &CalculatorResult) {
        let mut screen = self.screen.lock();
        screen.readout = Some(result.clone());
        screen.equations.push(result.clone());
    }

    fn reset(&self) {
        let mut screen = self.screen.lock();
        screen.readout = None;
        screen.resets += 1;
    }

    fn customized_key_pressed(&self) {
        self.screen.lock().customized_presses += 1;
    }
}
