// ============================================================================
// Circuit Board
// Routes keyboard events into the processor and results to the display
// ============================================================================

use crate::domain::{CustomizedKey, FunctionKey, Key, NumpadKey, OperatorKey};
use crate::engine::Processor;
use crate::interfaces::{DisplayUnit, KeyboardUnit};
use crate::numeric::CalculatorResult;
use std::sync::Arc;

/// Key router owning one processor.
///
/// The display and keyboard are optional. Without a display every result is
/// still returned to the caller but nothing is rendered.
#[derive(Default)]
pub struct CircuitBoard {
    processor: Processor,
    display_unit: Option<Arc<dyn DisplayUnit>>,
    keyboard_unit: Option<Arc<dyn KeyboardUnit>>,
}

impl CircuitBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a display, clear the processor and lay out its keys
    pub fn set_display_unit(&mut self, display: Arc<dyn DisplayUnit>) {
        self.display_unit = Some(Arc::clone(&display));
        self.install_display_unit(display.as_ref());
    }

    /// Attach a keyboard and lay out the current display's keys on it
    pub fn set_keyboard_unit(&mut self, keyboard: Arc<dyn KeyboardUnit>) {
        self.keyboard_unit = Some(keyboard);
        if let Some(display) = self.display_unit.clone() {
            self.install_display_unit(display.as_ref());
        }
    }

    pub fn set_customized_key_enabled(&self, enabled: bool) {
        if let Some(keyboard) = &self.keyboard_unit {
            keyboard.set_customized_key_enabled(enabled);
        }
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    // ========================================================================
    // Key events
    // ========================================================================

    pub fn on_numpad_key_pressed(&mut self, key: NumpadKey) -> CalculatorResult {
        let result = self.processor.digit_key_pressed(key);
        if let Some(display) = &self.display_unit {
            display.numeric_output_delivered(&result);
        }
        result
    }

    pub fn on_operator_key_pressed(&mut self, key: &OperatorKey) -> CalculatorResult {
        let result = self.processor.operator_key_pressed(key);
        if let Some(display) = &self.display_unit {
            display.numeric_output_delivered(&result);
        }
        result
    }

    pub fn on_function_key_pressed(&mut self, key: FunctionKey) -> CalculatorResult {
        let result = self.processor.function_key_pressed(key);
        if let Some(display) = &self.display_unit {
            match key {
                FunctionKey::Equal => display.equation_evaluated(&result),
                FunctionKey::Clear => display.reset(),
            }
        }
        result
    }

    /// Hand the customized key to the display. The processor is not involved.
    ///
    /// Returns whether the press was dispatched.
    pub fn on_customized_key_pressed(&self) -> bool {
        let Some(display) = &self.display_unit else {
            return false;
        };

        let enabled = display
            .customized_key()
            .is_some_and(|key| key.enabled);
        if enabled {
            display.customized_key_pressed();
        } else {
            tracing::debug!("Ignoring press on disabled customized key");
        }
        enabled
    }

    /// Dispatch any resolved key. Customized keys produce no numeric result.
    pub fn press(&mut self, key: &Key) -> Option<CalculatorResult> {
        match key {
            Key::Numpad(key) => Some(self.on_numpad_key_pressed(*key)),
            Key::Operator(key) => Some(self.on_operator_key_pressed(key)),
            Key::Function(key) => Some(self.on_function_key_pressed(*key)),
            Key::Customized(_) => {
                self.on_customized_key_pressed();
                None
            },
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn install_display_unit(&mut self, display: &dyn DisplayUnit) {
        let _ = self.on_function_key_pressed(FunctionKey::Clear);

        if let Some(keyboard) = &self.keyboard_unit {
            let operators = display.enabled_operator_keys();
            keyboard.install_operator_keys(&operators);

            let customized_key = display
                .customized_key()
                .unwrap_or_else(CustomizedKey::placeholder);
            keyboard.install_customized_key(&customized_key);
            keyboard.set_customized_key_enabled(customized_key.enabled);

            tracing::debug!(
                "Installed {} operator keys and customized key {:?}",
                operators.len(),
                customized_key.name
            );
        }
    }
}
