// ============================================================================
// Basic Usage Example
// ============================================================================

use ruler_scale::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Ruler Scale Example ===\n");

    println!("Rounding-safe arithmetic:");
    println!("  0.1 + 0.2  = {}", add(0.1, 0.2).unwrap());
    println!("  0.3 - 0.2  = {}", subtract(0.3, 0.2).unwrap());
    println!("  19.9 * 100 = {}", multiply(19.9, 100.0).unwrap());
    println!("  0.3 / 0.1  = {}", divide(0.3, 0.1).unwrap());

    // Compare with naive f64 arithmetic
    println!("\nNaive f64 for contrast:");
    println!("  0.1 + 0.2  = {}", 0.1 + 0.2);
    println!("  19.9 * 100 = {}", 19.9 * 100.0);

    let config = ScaleConfig::new(0.0, 1.0);
    let ticks = build_ticks(&config).unwrap();

    println!(
        "\nTicks for [{}, {}] ({} entries):",
        config.min_scale,
        config.max_scale,
        ticks.len()
    );
    for tick in &ticks {
        let mark = if tick.is_int { "|" } else { "·" };
        println!("  {} {}", mark, tick.value);
    }
}
