// ============================================================================
// Scale Ticks
// Ordered tick-list generation between two bounds
// ============================================================================

use crate::numeric::{self, NumericResult};
use crate::scale::config::ScaleConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Span between two consecutive ticks.
pub const SCALE_SPAN: f64 = 0.1;

/// One labeled position on the ruler.
///
/// Immutable once produced; the rendering layer typically draws a long
/// mark for whole-valued ticks and a short one otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleTick {
    /// Position of the tick on the scale
    pub value: f64,

    /// Whether the position is a whole number
    pub is_int: bool,
}

/// Build the ordered tick list for a scale configuration.
///
/// The list starts at `min_scale` (always emitted, even for an inverted
/// range) and advances in exact spans of [`SCALE_SPAN`] via
/// [`numeric::add`]. Whenever the running value is still within
/// `max_scale` the following increment is emitted too, so the list always
/// runs one tick past the upper bound.
///
/// # Errors
/// Returns `NonFiniteInput` when either bound is NaN or infinite.
///
/// # Example
/// ```
/// use ruler_scale::scale::{build_ticks, ScaleConfig};
///
/// let ticks = build_ticks(&ScaleConfig::new(0.0, 0.3)).unwrap();
/// let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
/// assert_eq!(values, vec![0.0, 0.1, 0.2, 0.3, 0.4]);
/// ```
pub fn build_ticks(config: &ScaleConfig) -> NumericResult<Vec<ScaleTick>> {
    config.validate()?;

    let mut values = Vec::new();
    let mut current = config.min_scale;
    values.push(current);
    while current <= config.max_scale {
        current = numeric::add(current, SCALE_SPAN)?;
        values.push(current);
    }

    let ticks: Vec<ScaleTick> = values
        .into_iter()
        .map(|value| ScaleTick {
            value,
            is_int: value.fract() == 0.0,
        })
        .collect();

    tracing::debug!(
        "Built {} ticks for scale [{}, {}]",
        ticks.len(),
        config.min_scale,
        config.max_scale
    );

    Ok(ticks)
}
