// ============================================================================
// Calculator Configuration
// Operator set, angle unit and customized key for a keyboard layout
// ============================================================================

use super::keys::CustomizedKey;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Builtin Operators
// ============================================================================

/// Operators shipped with the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuiltinOperator {
    /// `1+1=2`
    Add,
    /// `1-1=0`
    Subtract,
    /// `2*3=6`
    Multiply,
    /// `1/2=0.5`, fails on a zero divisor
    Divide,
    /// Unary sine
    Sin,
    /// Unary cosine
    Cos,
}

impl BuiltinOperator {
    pub const ARITHMETIC: [BuiltinOperator; 4] = [
        BuiltinOperator::Add,
        BuiltinOperator::Subtract,
        BuiltinOperator::Multiply,
        BuiltinOperator::Divide,
    ];

    pub const TRIGONOMETRIC: [BuiltinOperator; 2] = [BuiltinOperator::Sin, BuiltinOperator::Cos];
}

// ============================================================================
// Angle Unit
// ============================================================================

/// How trigonometric operators read their operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }
}

// ============================================================================
// Config Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("calculator name cannot be empty")]
    EmptyName,
    #[error("at least one operator must be enabled")]
    NoOperators,
    #[error("operator {0:?} is enabled more than once")]
    DuplicateOperator(BuiltinOperator),
    #[error("customized key name cannot be empty")]
    EmptyCustomizedKeyName,
    #[error("config serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Everything a key router needs to lay out its keyboard
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Layout name, e.g. "basic"
    pub name: String,

    /// Enabled operators, in keyboard order
    pub operators: Vec<BuiltinOperator>,

    /// Unit for `sin`/`cos`
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle_unit: AngleUnit,

    /// Optional extension key. None installs the disabled placeholder
    #[cfg_attr(feature = "serde", serde(default))]
    pub customized_key: Option<CustomizedKey>,
}

impl CalculatorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operators: Vec::new(),
            angle_unit: AngleUnit::Degrees,
            customized_key: None,
        }
    }

    /// Builder method: Enable one more operator
    pub fn with_operator(mut self, operator: BuiltinOperator) -> Self {
        self.operators.push(operator);
        self
    }

    /// Builder method: Enable several operators
    pub fn with_operators(mut self, operators: impl IntoIterator<Item = BuiltinOperator>) -> Self {
        self.operators.extend(operators);
        self
    }

    /// Builder method: Set the trigonometric angle unit
    pub fn with_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    /// Builder method: Set the customized key
    pub fn with_customized_key(mut self, key: CustomizedKey) -> Self {
        self.customized_key = Some(key);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if self.operators.is_empty() {
            return Err(ConfigError::NoOperators);
        }

        for (i, operator) in self.operators.iter().enumerate() {
            if self.operators[..i].contains(operator) {
                return Err(ConfigError::DuplicateOperator(*operator));
            }
        }

        if let Some(key) = &self.customized_key {
            if key.name.trim().is_empty() {
                return Err(ConfigError::EmptyCustomizedKeyName);
            }
        }

        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Parse and validate a JSON config
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Four-function calculator
    /// - `+ - * /`
    /// - No customized key
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(name).with_operators(BuiltinOperator::ARITHMETIC)
    }

    /// Scientific calculator
    /// - `+ - * /` plus `sin` and `cos`
    /// - Angles in degrees
    pub fn scientific(name: impl Into<String>) -> Self {
        Self::basic(name).with_operators(BuiltinOperator::TRIGONOMETRIC)
    }
}
