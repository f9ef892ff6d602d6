// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// converter's debug events for rejected input.

use rmb_formal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== RMB Formal Numerals Example ===\n");

    let inputs = [
        "0",
        "1005",
        "1000.00",
        "10001",
        "100000000.5",
        "0.05",
        "12.34",
        "999999999999.99",
        "1000000000000",
        "1.005",
        "abc",
    ];

    println!("Standard style:");
    for input in inputs {
        match convert(input) {
            Ok(text) => println!("  {:>16} -> {}", input, text),
            Err(err) if err.is_too_large() => println!("  {:>16} -> too large: {}", input, err),
            Err(err) => println!("  {:>16} -> rejected: {}", input, err),
        }
    }

    let converter = match ConverterBuilder::from_config(ConverterConfig::bank_check()).build() {
        Ok(converter) => converter,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            return;
        }
    };

    println!("\nCheque style:");
    for input in ["1005", "100000000.5", "0.05"] {
        if let Ok(text) = converter.convert(input) {
            println!("  {:>16} -> {}", input, text);
        }
    }

    println!("\nLive validation while typing \"1000.505\":");
    let typed = "1000.505";
    for end in 1..=typed.len() {
        let prefix = &typed[..end];
        let status = if is_valid_amount(prefix) { "ok" } else { "invalid" };
        println!("  {:<10} {}", prefix, status);
    }
}
