// ============================================================================
// Builtin Operators
// The operator keys shipped with the engine
// ============================================================================

use crate::domain::{AngleUnit, Arity, BuiltinOperator, OperatorKey};
use crate::numeric::CalculatorError;

/// Creates the operator key for a builtin operator
pub fn create_operator_key(operator: BuiltinOperator, unit: AngleUnit) -> OperatorKey {
    match operator {
        BuiltinOperator::Add => add(),
        BuiltinOperator::Subtract => subtract(),
        BuiltinOperator::Multiply => multiply(),
        BuiltinOperator::Divide => divide(),
        BuiltinOperator::Sin => sin(unit),
        BuiltinOperator::Cos => cos(unit),
    }
}

/// `+`
pub fn add() -> OperatorKey {
    OperatorKey::new("+", Arity::Binary, |args| Ok(args[0] + args[1]))
}

/// `-`
pub fn subtract() -> OperatorKey {
    OperatorKey::new("-", Arity::Binary, |args| Ok(args[0] - args[1]))
}

/// `*`
pub fn multiply() -> OperatorKey {
    OperatorKey::new("*", Arity::Binary, |args| Ok(args[0] * args[1]))
}

/// `/`. A divisor of exactly zero fails with `DividedByZero`.
pub fn divide() -> OperatorKey {
    OperatorKey::new("/", Arity::Binary, |args| {
        let (dividend, divisor) = (args[0], args[1]);
        if divisor == 0.0 {
            return Err(CalculatorError::DividedByZero);
        }
        Ok(dividend / divisor)
    })
}

/// `sin`, e.g. `sin(90) = 1` in degrees
pub fn sin(unit: AngleUnit) -> OperatorKey {
    OperatorKey::new("sin", Arity::Unary, move |args| {
        Ok(unit.to_radians(args[0]).sin())
    })
}

/// `cos`, e.g. `cos(90) = 0` in degrees
pub fn cos(unit: AngleUnit) -> OperatorKey {
    OperatorKey::new("cos", Arity::Unary, move |args| {
        Ok(unit.to_radians(args[0]).cos())
    })
}
