use thiserror::Error;

/// Configuration rejected at construction time, before any frame is evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("click duration must be non-negative, got {0}")]
    NegativeClickDuration(i64),

    #[error("viewport must have positive finite size, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("wobble {field} must be finite, got {value}")]
    NonFiniteWobble { field: &'static str, value: f64 },

    #[error("hitbox padding must be non-negative and finite, got {0}")]
    InvalidHitboxPadding(f64),

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f64),

    #[error("parallax {field} must be finite, got {value}")]
    NonFiniteStrength { field: &'static str, value: f64 },

    #[error("camera override target must be finite, got ({x}, {y})")]
    NonFiniteOverride { x: f64, y: f64 },

    #[error("waypoint coordinates must be finite (waypoint {index})")]
    NonFiniteWaypoint { index: usize },

    #[error("waypoint {index} at frame {frame} comes before frame {previous}")]
    WaypointsOutOfOrder {
        index: usize,
        frame: i64,
        previous: i64,
    },

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

/// Failure while exporting a diagnostic trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "trace-png")]
    #[error("trace image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("empty frame range {start}..={end}")]
    EmptyRange { start: i64, end: i64 },

    #[error("frame range {start}..={end} exceeds {max} frames")]
    RangeTooLarge { start: i64, end: i64, max: i64 },
}
