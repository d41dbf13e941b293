// ============================================================================
// Numeric Module
// Error types and digit literal parsing for the arithmetic engine
// ============================================================================
//
// This module provides:
// - CalculatorError / CalculatorResult: typed failures, never panics
// - DigitBuffer: pending numpad keys with the single-separator rule
// - parse_literal: strict base-10 parsing of concatenated key literals

mod errors;
mod literal;

pub use errors::{CalculatorError, CalculatorResult};
pub use literal::{parse_literal, DigitBuffer};
