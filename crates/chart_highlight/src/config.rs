use serde::{Deserialize, Serialize};

use crate::error::{HighlightError, Result};

/// Fixed hit radius for proximity-kind series, in pixels.
///
/// Half of a 44px touch target. Not affected by `max_highlight_distance`.
pub const PROXIMITY_RADIUS: f32 = 22.0;

/// Tunables for highlight resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Pixel ceiling for containment-kind matches.
    pub max_highlight_distance: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_highlight_distance: 500.0,
        }
    }
}

impl HighlightConfig {
    pub fn new(max_highlight_distance: f32) -> Result<Self> {
        let config = Self {
            max_highlight_distance,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // `+inf` is allowed and means "no ceiling".
        if self.max_highlight_distance.is_nan() || self.max_highlight_distance < 0.0 {
            return Err(HighlightError::InvalidConfig(format!(
                "max_highlight_distance must be >= 0, got {}",
                self.max_highlight_distance
            )));
        }
        Ok(())
    }
}
