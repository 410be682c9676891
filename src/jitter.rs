//! Organic jitter: deterministic pseudo-periodic drift of the cursor.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WOBBLE_AMPLITUDE, DEFAULT_WOBBLE_SPEED, WOBBLE_Y_FREQUENCY_RATIO};
use crate::error::ConfigError;
use crate::types::{Frame, Vector2};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
    /// Peak drift in pixels.
    pub amplitude: f64,
    /// Angular speed in radians per frame.
    pub speed: f64,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_WOBBLE_AMPLITUDE,
            speed: DEFAULT_WOBBLE_SPEED,
        }
    }
}

impl WobbleConfig {
    /// No drift at all.
    pub const STILL: WobbleConfig = WobbleConfig {
        amplitude: 0.0,
        speed: 0.0,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("amplitude", self.amplitude), ("speed", self.speed)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWobble { field, value });
            }
        }
        Ok(())
    }
}

/// Jitter offset at `frame`. Pure function of its inputs.
pub fn wobble(frame: Frame, config: &WobbleConfig) -> Vector2 {
    let phase = frame as f64 * config.speed;
    Vector2::new(
        phase.sin() * config.amplitude,
        (phase * WOBBLE_Y_FREQUENCY_RATIO).cos() * config.amplitude,
    )
}
