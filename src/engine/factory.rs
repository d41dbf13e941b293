// ============================================================================
// Circuit Board Factory
// Creates circuit boards with a configured keyboard layout
// ============================================================================

use crate::domain::config::{AngleUnit, BuiltinOperator, CalculatorConfig, ConfigError};
use crate::domain::{CustomizedKey, OperatorKey};
use crate::engine::operators::create_operator_key;
use crate::engine::CircuitBoard;
use crate::interfaces::{DisplayUnit, KeyboardUnit, NoOpDisplayUnit};
use crate::numeric::CalculatorResult;
use std::sync::Arc;

// ============================================================================
// Configured Display
// ============================================================================

/// Display whose keyboard layout comes from a `CalculatorConfig`.
///
/// Output is forwarded to the wrapped display unchanged.
pub struct ConfiguredDisplay {
    operators: Vec<OperatorKey>,
    customized_key: Option<CustomizedKey>,
    inner: Arc<dyn DisplayUnit>,
}

impl ConfiguredDisplay {
    pub fn new(config: &CalculatorConfig, inner: Arc<dyn DisplayUnit>) -> Self {
        Self {
            operators: operator_keys(config),
            customized_key: config.customized_key.clone(),
            inner,
        }
    }
}

impl DisplayUnit for ConfiguredDisplay {
    fn enabled_operator_keys(&self) -> Vec<OperatorKey> {
        self.operators.clone()
    }

    fn customized_key(&self) -> Option<CustomizedKey> {
        self.customized_key.clone()
    }

    fn numeric_output_delivered(&self, result: &CalculatorResult) {
        self.inner.numeric_output_delivered(result);
    }

    fn equation_evaluated(&self, result: &CalculatorResult) {
        self.inner.equation_evaluated(result);
    }

    fn reset(&self) {
        self.inner.reset();
    }

    fn customized_key_pressed(&self) {
        self.inner.customized_key_pressed();
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Builds the configured operator keys, in configured order, honouring the
/// angle unit
pub fn operator_keys(config: &CalculatorConfig) -> Vec<OperatorKey> {
    config
        .operators
        .iter()
        .map(|op| create_operator_key(*op, config.angle_unit))
        .collect()
}

/// Creates a circuit board from configuration
///
/// # Arguments
/// * `config` - Keyboard layout configuration
/// * `display` - Display receiving the output
/// * `keyboard` - Optional keyboard the layout is installed on
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use std::sync::Arc;
///
/// let keyboard = Arc::new(VirtualKeyboard::new());
/// let board = create_from_config(
///     CalculatorConfig::scientific("sci"),
///     Arc::new(NoOpDisplayUnit),
///     Some(keyboard.clone()),
/// )
/// .unwrap();
///
/// assert_eq!(keyboard.operator_labels().len(), 6);
/// assert_eq!(board.processor().last_answer(), 0.0);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    display: Arc<dyn DisplayUnit>,
    keyboard: Option<Arc<dyn KeyboardUnit>>,
) -> Result<CircuitBoard, ConfigError> {
    config.validate()?;

    let mut board = CircuitBoard::new();
    if let Some(keyboard) = keyboard {
        board.set_keyboard_unit(keyboard);
    }
    board.set_display_unit(Arc::new(ConfiguredDisplay::new(&config, display)));

    tracing::debug!(
        "Created circuit board {:?} with {} operators",
        config.name,
        config.operators.len()
    );

    Ok(board)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating circuit boards with fluent API
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use std::sync::Arc;
///
/// let display = Arc::new(MemoryDisplayUnit::default());
/// let mut board = CircuitBoardBuilder::new("pocket")
///     .basic_operators()
///     .display(display.clone())
///     .build()
///     .unwrap();
///
/// board.on_numpad_key_pressed(NumpadKey::Digit(4)).unwrap();
/// assert_eq!(display.readout(), Some(Ok(4.0)));
/// ```
pub struct CircuitBoardBuilder {
    config: CalculatorConfig,
    display: Option<Arc<dyn DisplayUnit>>,
    keyboard: Option<Arc<dyn KeyboardUnit>>,
}

impl CircuitBoardBuilder {
    /// Create a new builder with no operators enabled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(name),
            display: None,
            keyboard: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            display: None,
            keyboard: None,
        }
    }

    // ========================================================================
    // Operator Configuration
    // ========================================================================

    /// Enable `+ - * /`
    pub fn basic_operators(mut self) -> Self {
        self.config = self.config.with_operators(BuiltinOperator::ARITHMETIC);
        self
    }

    /// Enable `sin` and `cos`
    pub fn trigonometric_operators(mut self) -> Self {
        self.config = self.config.with_operators(BuiltinOperator::TRIGONOMETRIC);
        self
    }

    pub fn with_operator(mut self, operator: BuiltinOperator) -> Self {
        self.config = self.config.with_operator(operator);
        self
    }

    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        self.config = self.config.with_angle_unit(unit);
        self
    }

    pub fn customized_key(mut self, key: CustomizedKey) -> Self {
        self.config = self.config.with_customized_key(key);
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Display receiving the output. Defaults to `NoOpDisplayUnit`
    pub fn display(mut self, display: Arc<dyn DisplayUnit>) -> Self {
        self.display = Some(display);
        self
    }

    pub fn keyboard(mut self, keyboard: Arc<dyn KeyboardUnit>) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the circuit board
    pub fn build(self) -> Result<CircuitBoard, ConfigError> {
        let display = self.display.unwrap_or_else(|| Arc::new(NoOpDisplayUnit));
        create_from_config(self.config, display, self.keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FunctionKey, Key, NumpadKey};
    use crate::interfaces::{MemoryDisplayUnit, VirtualKeyboard};

    #[test]
    fn test_operator_keys_follow_config_order() {
        let config = CalculatorConfig::new("trig")
            .with_operator(BuiltinOperator::Cos)
            .with_operator(BuiltinOperator::Add);

        let keys = operator_keys(&config);
        let names: Vec<&str> = keys.iter().map(|key| key.name()).collect();
        assert_eq!(names, vec!["cos", "+"]);
    }

    #[test]
    fn test_create_from_config() {
        let keyboard = Arc::new(VirtualKeyboard::new());
        let display = Arc::new(MemoryDisplayUnit::default());
        let config = CalculatorConfig::basic("basic").with_customized_key(CustomizedKey::new("rates"));

        let mut board = create_from_config(config, display.clone(), Some(keyboard.clone())).unwrap();

        assert_eq!(keyboard.operator_labels(), vec!["+", "-", "*", "/"]);
        assert_eq!(keyboard.customized_key(), Some(CustomizedKey::new("rates")));

        board.on_numpad_key_pressed(NumpadKey::Digit(8)).unwrap();
        assert_eq!(display.readout(), Some(Ok(8.0)));
        assert!(board.on_customized_key_pressed());
        assert_eq!(display.customized_presses(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = create_from_config(
            CalculatorConfig::new("empty"),
            Arc::new(NoOpDisplayUnit),
            None,
        );
        assert!(matches!(result, Err(ConfigError::NoOperators)));
    }

    #[test]
    fn test_builder_pattern() {
        let keyboard = Arc::new(VirtualKeyboard::new());
        let builder = CircuitBoardBuilder::new("sci")
            .basic_operators()
            .trigonometric_operators()
            .angle_unit(AngleUnit::Radians)
            .keyboard(keyboard.clone());

        assert_eq!(builder.config().operators.len(), 6);
        assert_eq!(builder.config().angle_unit, AngleUnit::Radians);

        let mut board = builder.build().unwrap();

        // cos(0) in radians through keyboard labels
        for label in ["0", "cos", "="] {
            let key = keyboard.resolve(label).unwrap();
            board.press(&key);
        }
        assert_eq!(board.processor().last_answer(), 1.0);
        assert_eq!(
            board.press(&Key::Function(FunctionKey::Clear)),
            Some(Ok(0.0))
        );
    }

    #[test]
    fn test_builder_validation() {
        let result = CircuitBoardBuilder::new("dup")
            .basic_operators()
            .with_operator(BuiltinOperator::Add)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateOperator(BuiltinOperator::Add))
        ));

        assert!(CircuitBoardBuilder::from_config(CalculatorConfig::scientific("sci"))
            .build()
            .is_ok());
    }
}
