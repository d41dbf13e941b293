// ============================================================================
// Digit Literal
// Accumulates numpad keys and parses them as a base-10 number
// ============================================================================

use crate::domain::NumpadKey;
use crate::numeric::{CalculatorError, CalculatorResult};
use smallvec::SmallVec;
use std::fmt::Write;

/// Keys entered since the last operator or function key.
///
/// Holds at most one separator. Most entries fit inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    keys: SmallVec<[NumpadKey; 16]>,
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key. A second separator is dropped and `false` is returned.
    pub fn push(&mut self, key: NumpadKey) -> bool {
        if key.is_separator() && self.has_separator() {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn has_separator(&self) -> bool {
        self.keys.iter().any(NumpadKey::is_separator)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Concatenated literal form of every key, in entry order.
    pub fn literal(&self) -> String {
        let mut literal = String::with_capacity(self.keys.len());
        for key in &self.keys {
            match key {
                NumpadKey::Digit(value) => {
                    // Writing into a String cannot fail
                    let _ = write!(literal, "{value}");
                },
                NumpadKey::Separator => literal.push('.'),
            }
        }
        literal
    }

    /// Parse the buffer as a floating point number.
    pub fn parse(&self) -> CalculatorResult {
        let literal = self.literal();
        parse_literal(&literal)
    }
}

/// Parse a plain decimal literal such as `"11.01"`.
///
/// Only digits with an optional leading minus and one `.` are accepted.
/// Exponents, `inf`, `NaN` and the empty string are rejected even though
/// `f64::from_str` would take some of them.
pub fn parse_literal(literal: &str) -> CalculatorResult {
    let unsigned = literal.strip_prefix('-').unwrap_or(literal);
    let mut digits = 0usize;
    let mut separators = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => separators += 1,
            _ => return Err(CalculatorError::ArgumentUnparseable(literal.to_string())),
        }
    }
    if digits == 0 || separators > 1 {
        return Err(CalculatorError::ArgumentUnparseable(literal.to_string()));
    }

    literal
        .parse::<f64>()
        .map_err(|_| CalculatorError::ArgumentUnparseable(literal.to_string()))
}
