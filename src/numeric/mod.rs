// ============================================================================
// Numeric Module
// Rounding-safe decimal arithmetic for scale generation
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide: decimal arithmetic over f64 without
//   binary representation error
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - Pure functions, no shared state
// - All arithmetic returns Result (no panics)
// - Scaled-integer recombination in i128 (no intermediate precision loss)

mod decimal_math;
mod errors;

pub use decimal_math::{add, divide, multiply, subtract};
pub use errors::{NumericError, NumericResult};
