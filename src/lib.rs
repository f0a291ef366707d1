// ============================================================================
// Ruler Scale Library
// Precision-safe decimal arithmetic and tick-list generation for ruler UIs
// ============================================================================

//! # Ruler Scale
//!
//! Decimal arithmetic without binary floating-point rounding error, and an
//! ordered tick-list builder for ruler/scale UI components.
//!
//! Naive `f64` arithmetic accumulates representation error on short decimal
//! values (`0.1 + 0.2 == 0.30000000000000004`, `19.9 * 100.0 ==
//! 1989.9999999999998`). This crate decomposes each operand into an integer
//! scaled by a power of ten, combines the integers exactly, and scales the
//! result back down — so tick positions land on the decimals a user
//! actually expects to see on a ruler.
//!
//! ## Features
//!
//! - **Rounding-safe arithmetic**: `add`, `subtract`, `multiply`, `divide`
//!   over `f64` with exact decimal results for short decimal inputs
//! - **Tick-list generation**: ordered `ScaleTick` lists between a minimum
//!   and maximum bound, stepping by a fixed span of `0.1`
//! - **Strict input validation**: NaN and infinite operands are rejected at
//!   the boundary instead of silently propagating
//! - **Pure functions**: no shared state, no concurrency, no I/O
//!
//! ## Example
//!
//! ```rust
//! use ruler_scale::prelude::*;
//!
//! assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
//! assert_eq!(multiply(19.9, 100.0).unwrap(), 1990.0);
//!
//! let ticks = build_ticks(&ScaleConfig::new(0.0, 0.5)).unwrap();
//! assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
//! assert!(ticks[0].is_int);
//! assert!(!ticks[1].is_int);
//! ```

pub mod numeric;
pub mod scale;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        add, divide, multiply, subtract, NumericError, NumericResult,
    };
    pub use crate::scale::{build_ticks, ScaleConfig, ScaleTick, SCALE_SPAN};
}
