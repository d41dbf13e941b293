// ============================================================================
// Operator Key
// Name + arity + fallible operand transform
// ============================================================================

use super::keys::KeyboardKey;
use crate::numeric::{CalculatorError, CalculatorResult};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operand transform. The slice length always equals the operator's arity.
pub type OperatorFn = dyn Fn(&[f64]) -> CalculatorResult + Send + Sync;

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn operand_count(&self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// Immutable operator value, e.g. `+`.
///
/// Cloning is cheap: the transform is shared.
#[derive(Clone)]
pub struct OperatorKey {
    name: String,
    arity: Arity,
    operation: Arc<OperatorFn>,
}

impl OperatorKey {
    /// Create an operator from a name, an arity and its transform
    pub fn new<F>(name: impl Into<String>, arity: Arity, operation: F) -> Self
    where
        F: Fn(&[f64]) -> CalculatorResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            operation: Arc::new(operation),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Run the transform. Any operand count other than the arity is
    /// `ArgumentMissing`.
    pub fn apply(&self, operands: &[f64]) -> CalculatorResult {
        if !self.is_satisfied_by(operands.len()) {
            return Err(CalculatorError::ArgumentMissing);
        }
        (self.operation)(operands)
    }

    /// Whether `available` operands satisfy this operator
    pub fn is_satisfied_by(&self, available: usize) -> bool {
        self.arity.operand_count() == available
    }
}

impl KeyboardKey for OperatorKey {
    fn name(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Debug for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorKey")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Operators compare by name and arity; transforms are opaque.
impl PartialEq for OperatorKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AngleUnit;
    use crate::engine::operators::{add, sin};

    #[test]
    fn test_arity_operand_count() {
        assert_eq!(Arity::Unary.operand_count(), 1);
        assert_eq!(Arity::Binary.operand_count(), 2);
    }

    #[test]
    fn test_custom_operator() {
        let modulo = OperatorKey::new("mod", Arity::Binary, |args| {
            if args[1] == 0.0 {
                return Err(CalculatorError::OperationFailed("modulo by zero".to_string()));
            }
            Ok(args[0] % args[1])
        });

        assert_eq!(modulo.name(), "mod");
        assert_eq!(KeyboardKey::name(&modulo), "mod");
        assert!(modulo.is_satisfied_by(2));
        assert!(!modulo.is_satisfied_by(1));
        assert_eq!(modulo.apply(&[7.0, 3.0]), Ok(1.0));
        assert!(matches!(
            modulo.apply(&[7.0, 0.0]),
            Err(CalculatorError::OperationFailed(_))
        ));
    }

    #[test]
    fn test_apply_rejects_wrong_operand_count() {
        assert_eq!(add().apply(&[1.0]), Err(CalculatorError::ArgumentMissing));
        assert_eq!(add().apply(&[]), Err(CalculatorError::ArgumentMissing));
        assert_eq!(
            sin(AngleUnit::Degrees).apply(&[1.0, 2.0]),
            Err(CalculatorError::ArgumentMissing)
        );
        assert_eq!(add().apply(&[1.0, 2.0]), Ok(3.0));
    }

    #[test]
    fn test_operator_debug_and_equality() {
        let negate = OperatorKey::new("neg", Arity::Unary, |args| Ok(-args[0]));
        let other = OperatorKey::new("neg", Arity::Unary, |args| Ok(args[0]));

        assert_eq!(negate, other);
        assert!(format!("{negate:?}").contains("neg"));
    }
}
