// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator_engine::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn type_labels(board: &mut CircuitBoard, keyboard: &VirtualKeyboard, labels: &[&str]) {
    for label in labels {
        match keyboard.resolve(label) {
            Some(key) => {
                let result = board.press(&key);
                println!("  {:>4} -> {:?}", label, result);
            },
            None => println!("  {:>4} -> no such key", label),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Calculator Engine Example ===\n");

    // Scientific layout with an extra key the display handles itself
    let keyboard = Arc::new(VirtualKeyboard::new());
    let display = Arc::new(MemoryDisplayUnit::default());
    let mut board = CircuitBoardBuilder::new("desk")
        .basic_operators()
        .trigonometric_operators()
        .customized_key(CustomizedKey::new("rates"))
        .display(display.clone())
        .keyboard(keyboard.clone())
        .build()
        .unwrap();

    println!("Operators on the keyboard: {:?}\n", keyboard.operator_labels());

    println!("Chained addition 11 + 22.33 =");
    type_labels(
        &mut board,
        &keyboard,
        &["1", "1", "+", "2", "2", ".", "3", "3", "="],
    );

    println!("\nContinue from the last answer: - 3 =");
    type_labels(&mut board, &keyboard, &["-", "3", "="]);

    println!("\nUnary operator on a typed value: 90 sin");
    type_labels(&mut board, &keyboard, &["AC", "9", "0", "sin"]);

    println!("\nDivision by zero, then a new divisor: 8 / 0 + 4 =");
    type_labels(
        &mut board,
        &keyboard,
        &["AC", "8", "/", "0", "+", "4", "="],
    );

    println!("\nCustomized key");
    type_labels(&mut board, &keyboard, &["rates"]);
    board.set_customized_key_enabled(false);
    type_labels(&mut board, &keyboard, &["rates"]);

    println!("\n=== Display ===");
    println!("Readout: {:?}", display.readout());
    println!("Equations: {:?}", display.equations());
    println!("Customized presses: {}", display.customized_presses());
    println!("Processor: {:?}", board.processor().snapshot());
}
