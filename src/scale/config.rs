// ============================================================================
// Scale Configuration
// Bounds for a ruler scale
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use crate::scale::ticks::{build_ticks, ScaleTick};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for generating a ruler scale.
///
/// `min_scale` is always emitted as the first tick. `max_scale` is the
/// upper bound the generated list runs up to (and one span past); it may
/// lie below `min_scale`, in which case the list holds the minimum alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleConfig {
    /// Lower bound of the scale, emitted as the first tick
    pub min_scale: f64,

    /// Upper bound of the scale
    pub max_scale: f64,
}

impl ScaleConfig {
    /// Create a new configuration.
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
        }
    }

    /// Validate the configuration.
    ///
    /// Both bounds must be finite; an inverted range (`min_scale` above
    /// `max_scale`) is valid and yields a single-tick list.
    pub fn validate(&self) -> NumericResult<()> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() {
            return Err(NumericError::NonFiniteInput);
        }
        Ok(())
    }

    /// Build the tick list for this configuration.
    pub fn ticks(&self) -> NumericResult<Vec<ScaleTick>> {
        build_ticks(self)
    }
}
