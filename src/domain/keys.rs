// ============================================================================
// Calculator Keys
// Numpad, function and customized keys
// ============================================================================

use super::operator::OperatorKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that can sit on the calculator keyboard.
pub trait KeyboardKey {
    /// Label shown on the key
    fn name(&self) -> String;
}

// ============================================================================
// Numpad Key
// ============================================================================

/// Keys on the numeric pad.
///
/// `Digit` accepts any integer so callers can enter `Digit(11)` as a shortcut
/// for two presses. Values outside `0..=9` may produce an unparseable literal,
/// e.g. `Digit(1)` followed by `Digit(-21)` reads `"1-21"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumpadKey {
    Digit(i64),
    /// Decimal separator, always `.`
    Separator,
}

impl NumpadKey {
    pub fn is_separator(&self) -> bool {
        matches!(self, NumpadKey::Separator)
    }
}

impl KeyboardKey for NumpadKey {
    fn name(&self) -> String {
        match self {
            NumpadKey::Digit(value) => value.to_string(),
            NumpadKey::Separator => ".".to_string(),
        }
    }
}

// ============================================================================
// Function Key
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionKey {
    /// Reset every register, including the last answer
    Clear,
    /// Complete the pending expression
    Equal,
}

impl KeyboardKey for FunctionKey {
    fn name(&self) -> String {
        match self {
            FunctionKey::Clear => "AC".to_string(),
            FunctionKey::Equal => "=".to_string(),
        }
    }
}

// ============================================================================
// Customized Key
// ============================================================================

/// Extension key dispatched straight to the display, bypassing arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomizedKey {
    pub name: String,
    pub enabled: bool,
}

impl CustomizedKey {
    /// Create an enabled key
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }

    /// Placeholder installed when the display offers no key of its own
    pub fn placeholder() -> Self {
        Self {
            name: "func".to_string(),
            enabled: false,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyboardKey for CustomizedKey {
    fn name(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Any Key
// ============================================================================

/// A resolved key press of any category
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Numpad(NumpadKey),
    Operator(OperatorKey),
    Function(FunctionKey),
    Customized(CustomizedKey),
}

impl KeyboardKey for Key {
    fn name(&self) -> String {
        match self {
            Key::Numpad(key) => key.name(),
            Key::Operator(key) => KeyboardKey::name(key),
            Key::Function(key) => key.name(),
            Key::Customized(key) => key.name(),
        }
    }
}
