//! Parallax camera for the pseudo-3D scene.
//!
//! The camera recoils opposite the tracked point and tilts toward it. There
//! is no state: every frame is derived from the target alone.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CAMERA_FOLLOW, DEFAULT_FOV_DEGREES, DEFAULT_PARALLAX_STRENGTH, DEFAULT_ROTATE_STRENGTH,
};
use crate::error::ConfigError;
use crate::types::{CameraTransform, MousePosition, Point, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Translation per unit of normalized offset, as a fraction of viewport size.
    pub parallax_strength: f64,
    /// Tilt in degrees at the viewport edge.
    pub rotate_strength: f64,
    /// Track the simulated cursor when no override is set.
    pub follow: bool,
    /// Fixed look-at point; takes precedence over `follow`.
    pub override_target: Option<Point>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV_DEGREES,
            parallax_strength: DEFAULT_PARALLAX_STRENGTH,
            rotate_strength: DEFAULT_ROTATE_STRENGTH,
            follow: DEFAULT_CAMERA_FOLLOW,
            override_target: None,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        for (field, value) in [
            ("parallax_strength", self.parallax_strength),
            ("rotate_strength", self.rotate_strength),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteStrength { field, value });
            }
        }
        if let Some(target) = self.override_target {
            if !target.is_finite() {
                return Err(ConfigError::NonFiniteOverride {
                    x: target.x,
                    y: target.y,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParallaxCamera {
    config: ParallaxConfig,
}

impl ParallaxCamera {
    pub fn new(config: ParallaxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// The point the camera looks at: override, else cursor if following,
    /// else viewport center.
    pub fn active_target(&self, mouse: Option<&MousePosition>, viewport: &Viewport) -> Point {
        if let Some(target) = self.config.override_target {
            return target;
        }
        match mouse {
            Some(mouse) if self.config.follow => mouse.point(),
            _ => viewport.center(),
        }
    }

    /// Transform for the current frame given the simulated cursor.
    pub fn follow(&self, mouse: &MousePosition, viewport: &Viewport) -> CameraTransform {
        self.transform(self.active_target(Some(mouse), viewport), viewport)
    }

    /// Transform looking at `target`.
    pub fn transform(&self, target: Point, viewport: &Viewport) -> CameraTransform {
        let nx = (target.x / viewport.width) * 2.0 - 1.0;
        let ny = (target.y / viewport.height) * 2.0 - 1.0;

        CameraTransform {
            translate_x: -nx * viewport.width * self.config.parallax_strength,
            translate_y: -ny * viewport.height * self.config.parallax_strength,
            rotate_x: -ny * self.config.rotate_strength,
            rotate_y: nx * self.config.rotate_strength,
        }
    }

    /// Perspective depth in pixels matching the configured field of view.
    pub fn perspective_distance(&self, viewport: &Viewport) -> f64 {
        (viewport.height / 2.0) / (self.config.fov.to_radians() / 2.0).tan()
    }
}
