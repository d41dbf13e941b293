// ============================================================================
// Calculator Engine Library
// Key-driven arithmetic engine with operator chaining and a pluggable router
// ============================================================================

//! # Calculator Engine
//!
//! A small register machine that turns calculator key presses into numbers.
//!
//! ## Features
//!
//! - **Chained evaluation**: `1 + 2 + 3 =` applies each operator as soon as
//!   its operands are available
//! - **Pluggable operators**: any name + arity + fallible transform
//! - **Typed errors** for malformed literals, missing operands and division
//!   by zero, returned as values
//! - **Key router** forwarding results to a display and laying out a keyboard
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//!
//! let mut processor = Processor::new();
//!
//! processor.digit_key_pressed(NumpadKey::Digit(1)).unwrap();
//! processor.digit_key_pressed(NumpadKey::Digit(1)).unwrap();
//! assert_eq!(processor.operator_key_pressed(&operators::add()), Ok(11.0));
//!
//! processor.digit_key_pressed(NumpadKey::Digit(2)).unwrap();
//! assert_eq!(processor.operator_key_pressed(&operators::add()), Ok(13.0));
//!
//! processor.digit_key_pressed(NumpadKey::Digit(3)).unwrap();
//! assert_eq!(processor.function_key_pressed(FunctionKey::Equal), Ok(16.0));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AngleUnit, Arity, BuiltinOperator, CalculatorConfig, ConfigError, CustomizedKey,
        FunctionKey, Key, KeyboardKey, NumpadKey, OperatorKey,
    };
    pub use crate::engine::{
        create_from_config, create_operator_key, operator_keys, operators, CircuitBoard,
        CircuitBoardBuilder, Processor, ProcessorSnapshot,
    };
    pub use crate::interfaces::{
        DisplayUnit, KeyboardUnit, LoggingDisplayUnit, MemoryDisplayUnit, NoOpDisplayUnit,
        VirtualKeyboard,
    };
    pub use crate::numeric::{CalculatorError, CalculatorResult};
}
