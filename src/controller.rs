//! Mouse controller: frame → simulated cursor position.

use serde::{Deserialize, Serialize};

use crate::click::is_clicking;
use crate::constants::DEFAULT_CLICK_DURATION_FRAMES;
use crate::error::ConfigError;
use crate::jitter::{wobble, WobbleConfig};
use crate::target::{resolve_to_point, GeometryProvider};
use crate::timeline::{self, Waypoint};
use crate::types::{Frame, MousePosition, Viewport};

/// Cursor choreography: the waypoint timeline and how it is played back.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    pub waypoints: Vec<Waypoint>,
    pub wobble: WobbleConfig,
    /// Frames a click stays pressed after a click-triggering waypoint.
    pub click_duration: i64,
    pub viewport: Viewport,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            wobble: WobbleConfig::default(),
            click_duration: DEFAULT_CLICK_DURATION_FRAMES,
            viewport: Viewport::default(),
        }
    }
}

impl MouseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.click_duration < 0 {
            return Err(ConfigError::NegativeClickDuration(self.click_duration));
        }
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        self.wobble.validate()?;
        timeline::validate(&self.waypoints)
    }
}

/// Validated cursor choreography. `compute` is a pure function of
/// (frame, configuration, geometry snapshot).
#[derive(Clone, Debug)]
pub struct MouseController {
    config: MouseConfig,
}

impl MouseController {
    pub fn new(config: MouseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Mouse controller ready: {} waypoints, click duration {} frames",
            config.waypoints.len(),
            config.click_duration
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &MouseConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn compute(&self, frame: Frame, geometry: &impl GeometryProvider) -> MousePosition {
        let config = &self.config;

        // 1. Resolve the active segment
        let Some(segment) = timeline::resolve(frame, &config.waypoints) else {
            let center = config.viewport.center();
            return MousePosition {
                x: center.x,
                y: center.y,
                is_clicking: false,
            };
        };

        // 2. Resolve both endpoints to screen space
        let from = resolve_to_point(
            &segment.start.target,
            segment.start.offset,
            geometry,
            &config.viewport,
        );
        let to = resolve_to_point(
            &segment.end.target,
            segment.end.offset,
            geometry,
            &config.viewport,
        );

        // 3. Interpolate, then 4. jitter
        let base = from.lerp(to, segment.eased_t());
        let position = base.offset(wobble(frame, &config.wobble));

        // 5. Click window
        MousePosition {
            x: position.x,
            y: position.y,
            is_clicking: is_clicking(frame, &config.waypoints, config.click_duration),
        }
    }

    /// Evaluate a run of frames against one geometry snapshot.
    pub fn sample<I>(
        &self,
        frames: I,
        geometry: &impl GeometryProvider,
    ) -> Vec<(Frame, MousePosition)>
    where
        I: IntoIterator<Item = Frame>,
    {
        frames
            .into_iter()
            .map(|frame| (frame, self.compute(frame, geometry)))
            .collect()
    }
}
