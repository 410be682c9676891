//! Frame-driven cursor choreography for deterministic motion-graphics renders.
//!
//! A [`MotionSession`] turns a frame number into a simulated cursor
//! position, the hover state of tracked elements, and a parallax camera
//! transform. Everything except hover onset tracking is a pure function of
//! (frame, configuration, geometry snapshot).

pub mod camera;
pub mod click;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod ffi;
pub mod hover;
pub mod jitter;
pub mod session;
pub mod target;
pub mod timeline;
pub mod trace;
pub mod types;


pub use camera::{ParallaxCamera, ParallaxConfig};
pub use config::MotionConfig;
pub use controller::{MouseConfig, MouseController};
pub use easing::Easing;
pub use error::{ConfigError, TraceError};
pub use hover::{HoverConfig, HoverDetector, HoverTracker, TrackedElement};
pub use jitter::WobbleConfig;
pub use session::{FrameOutput, MotionSession};
pub use target::{ElementId, GeometryProvider, GeometrySnapshot, Target};
pub use timeline::{Segment, Waypoint};
pub use types::{
    CameraTransform, ElementRect, Frame, HoverState, MousePosition, Point, Vector2, Viewport,
};
