use serde::{Deserialize, Serialize};

use crate::camera::ParallaxConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::controller::MouseConfig;
use crate::error::ConfigError;
use crate::hover::HoverConfig;

/// Complete configuration of one motion session.
///
/// Deserializes from JSON where every field is optional:
///
/// ```json
/// {
///   "viewport": { "width": 1920, "height": 1080 },
///   "waypoints": [
///     { "frame": 0,  "target": { "absolute": { "x": 100, "y": 100 } } },
///     { "frame": 30, "target": { "element": "cta" }, "triggers_click": true,
///       "easing": "ease_out_cubic" }
///   ],
///   "wobble": { "amplitude": 2, "speed": 0.1 },
///   "click_duration": 8,
///   "parallax": { "follow": true, "parallax_strength": 0.02 },
///   "hover": { "hitbox_padding": 10, "tracked": [{ "id": "cta" }] }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    #[serde(flatten)]
    pub mouse: MouseConfig,
    pub parallax: ParallaxConfig,
    pub hover: HoverConfig,
    /// Log verbosity level: 0=off, 1=error, 2=warn, 3=info, 4=debug, 5=trace
    pub log_level: i32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mouse: MouseConfig::default(),
            parallax: ParallaxConfig::default(),
            hover: HoverConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl MotionConfig {
    /// Parse and validate in one step.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mouse.validate()?;
        self.parallax.validate()?;
        self.hover.validate()
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.log_level {
            i32::MIN..=0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
