use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_VIEWPORT_HEIGHT, REFERENCE_VIEWPORT_WIDTH};

/// Discrete render time. Monotonic within one render pass.
pub type Frame = i64;

/// Screen-space point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by `offset`.
    pub fn offset(self, offset: Vector2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Point, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Displacement in pixels, used for waypoint offsets and jitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Composition size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: REFERENCE_VIEWPORT_WIDTH,
            height: REFERENCE_VIEWPORT_HEIGHT,
        }
    }
}

/// Bounding rectangle of an on-screen element, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from an origin and a size, the way layout engines report boxes.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Inclusive containment test against the rect grown by `padding` on all sides.
    pub fn contains_padded(&self, point: Point, padding: f64) -> bool {
        point.x >= self.left - padding
            && point.x <= self.right + padding
            && point.y >= self.top - padding
            && point.y <= self.bottom + padding
    }
}

/// Simulated cursor state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
    pub is_clicking: bool,
}

impl MousePosition {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Hover state of one tracked element at one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub is_hovered: bool,
    /// Distance from the cursor to the element center; infinite when unmeasured.
    pub distance: f64,
    /// Frame at which the current hover run began.
    pub hover_start_frame: Option<Frame>,
}

impl HoverState {
    pub const UNMEASURED: HoverState = HoverState {
        is_hovered: false,
        distance: f64::INFINITY,
        hover_start_frame: None,
    };

    /// Frames elapsed since hover onset, if hovering.
    pub fn frames_hovered(&self, frame: Frame) -> Option<Frame> {
        self.hover_start_frame.map(|start| frame - start)
    }
}

/// Pseudo-3D scene transform. Translations in pixels, rotations in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CameraTransform {
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.rotate_x == 0.0
            && self.rotate_y == 0.0
    }
}
