// ============================================================================
// Scale Module
// Ruler tick-list generation
// ============================================================================
//
// This module provides:
// - ScaleConfig: bounds for a ruler scale
// - ScaleTick: one labeled position on the ruler
// - build_ticks: ordered tick-list generation between the bounds

mod config;
mod ticks;

pub use config::ScaleConfig;
pub use ticks::{build_ticks, ScaleTick, SCALE_SPAN};
