// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod display_unit;
mod keyboard_unit;

pub use display_unit::{DisplayUnit, LoggingDisplayUnit, MemoryDisplayUnit, NoOpDisplayUnit};
pub use keyboard_unit::{KeyboardUnit, VirtualKeyboard};
