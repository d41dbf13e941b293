// ============================================================================
// Domain Models Module
// Keys, operators and calculator configuration
// ============================================================================

pub mod config;
pub mod keys;
pub mod operator;

pub use config::{AngleUnit, BuiltinOperator, CalculatorConfig, ConfigError};
pub use keys::{CustomizedKey, FunctionKey, Key, KeyboardKey, NumpadKey};
pub use operator::{Arity, OperatorFn, OperatorKey};
