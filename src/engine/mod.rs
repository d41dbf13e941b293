// ============================================================================
// Engine Module
// Contains the arithmetic engine and the key router around it
// ============================================================================

mod circuit_board;
mod processor;

pub mod factory;
pub mod operators;

pub use circuit_board::CircuitBoard;
pub use factory::{create_from_config, operator_keys, CircuitBoardBuilder, ConfiguredDisplay};
pub use operators::create_operator_key;
pub use processor::{Processor, ProcessorSnapshot};
