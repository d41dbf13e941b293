// ============================================================================
// Keyboard Unit Interface
// Defines the contract for the input side of the calculator
// ============================================================================

use crate::domain::{CustomizedKey, FunctionKey, Key, KeyboardKey, NumpadKey, OperatorKey};
use parking_lot::RwLock;

/// Input device the circuit board lays out keys on
pub trait KeyboardUnit: Send + Sync {
    /// Put the customized key on the keyboard
    fn install_customized_key(&self, key: &CustomizedKey);

    /// A disabled customized key no longer reacts to presses
    fn set_customized_key_enabled(&self, enabled: bool);

    /// Replace the operator keys on the keyboard
    fn install_operator_keys(&self, keys: &[OperatorKey]);
}

#[derive(Debug, Default)]
struct Layout {
    operators: Vec<OperatorKey>,
    customized_key: Option<CustomizedKey>,
}

/// Keyboard that maps key labels to keys.
///
/// Digits `0`..`9`, `.`, `AC` and `=` are always present. Operators and the
/// customized key are whatever the circuit board installed last.
#[derive(Debug, Default)]
pub struct VirtualKeyboard {
    layout: RwLock<Layout>,
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a key label, e.g. `"7"`, `"+"`, `"sin"` or `"="`
    pub fn resolve(&self, label: &str) -> Option<Key> {
        if let Ok(digit) = label.parse::<u8>() {
            if digit <= 9 && label.len() == 1 {
                return Some(Key::Numpad(NumpadKey::Digit(i64::from(digit))));
            }
        }

        match label {
            "." => return Some(Key::Numpad(NumpadKey::Separator)),
            "AC" => return Some(Key::Function(FunctionKey::Clear)),
            "=" => return Some(Key::Function(FunctionKey::Equal)),
            _ => {},
        }

        let layout = self.layout.read();
        if let Some(operator) = layout.operators.iter().find(|op| op.name() == label) {
            return Some(Key::Operator(operator.clone()));
        }

        layout
            .customized_key
            .as_ref()
            .filter(|key| key.enabled && key.name == label)
            .map(|key| Key::Customized(key.clone()))
    }

    /// Labels of the installed operators, in keyboard order
    pub fn operator_labels(&self) -> Vec<String> {
        self.layout
            .read()
            .operators
            .iter()
            .map(KeyboardKey::name)
            .collect()
    }

    pub fn customized_key(&self) -> Option<CustomizedKey> {
        self.layout.read().customized_key.clone()
    }
}

impl KeyboardUnit for VirtualKeyboard {
    fn install_customized_key(&self, key: &CustomizedKey) {
        self.layout.write().customized_key = Some(key.clone());
    }

    fn set_customized_key_enabled(&self, enabled: bool) {
        if let Some(key) = self.layout.write().customized_key.as_mut() {
            key.enabled = enabled;
        }
    }

    fn install_operator_keys(&self, keys: &[OperatorKey]) {
        self.layout.write().operators = keys.to_vec();
    }
}
