//! Documented default constants for cursor choreography.
//!
//! These values are tuned for 1920x1080 motion-graphics compositions rendered
//! at 30-60 fps, where the simulated cursor should read as a human hand
//! without drawing attention to itself.

// ============================================================================
// Reference Viewport
// ============================================================================

/// Reference composition width in pixels.
///
/// **Rationale**: Full HD is the default composition size of the host
/// pipeline. Element targets that cannot be measured yet fall back to the
/// center of the configured viewport, which for this reference is x = 960.
pub const REFERENCE_VIEWPORT_WIDTH: f64 = 1920.0;

/// Reference composition height in pixels (fallback center y = 540).
pub const REFERENCE_VIEWPORT_HEIGHT: f64 = 1080.0;

// ============================================================================
// Organic Jitter Constants
// ============================================================================

/// Default wobble amplitude in pixels.
///
/// **Rationale**: A real hand never rests perfectly still. Two pixels of
/// drift is visible on a Full HD frame when zoomed in, yet small enough that
/// the cursor never leaves a typical 24px button hitbox while "resting" on it.
pub const DEFAULT_WOBBLE_AMPLITUDE: f64 = 2.0;

/// Default wobble angular speed in radians per frame.
///
/// **Rationale**: At 0.1 rad/frame the horizontal drift completes one cycle
/// every ~63 frames (~2s at 30fps), slow enough to read as breathing rather
/// than shaking.
pub const DEFAULT_WOBBLE_SPEED: f64 = 0.1;

/// Ratio between vertical and horizontal wobble frequency.
///
/// **Rationale**: Using a non-integer ratio keeps the x/y phases from lining
/// up, so the drift traces a Lissajous-like figure instead of a diagonal line.
pub const WOBBLE_Y_FREQUENCY_RATIO: f64 = 0.8;

// ============================================================================
// Click Constants
// ============================================================================

/// Default number of frames a click stays pressed after its waypoint.
///
/// **Rationale**: 8 frames is ~267ms at 30fps, which matches the duration of
/// a deliberate press-and-release and is long enough for a press animation
/// to register visually.
pub const DEFAULT_CLICK_DURATION_FRAMES: i64 = 8;

// ============================================================================
// Hover Constants
// ============================================================================

/// Default hitbox padding in pixels added on every side of a hovered element.
///
/// **Rationale**: The cursor tip is a single point, while the drawn cursor
/// sprite covers roughly 10px. Padding by the same amount makes hover onset
/// match what the viewer perceives as "touching" the element.
pub const DEFAULT_HITBOX_PADDING: f64 = 10.0;

// ============================================================================
// Parallax Camera Constants
// ============================================================================

/// Default vertical field of view in degrees.
///
/// **Rationale**: 50 degrees approximates a standard 35mm lens and keeps
/// perspective distortion of flat UI panels subtle.
pub const DEFAULT_FOV_DEGREES: f64 = 50.0;

/// Default translation strength as a fraction of the viewport extent.
///
/// **Rationale**: At 0.02, moving the target from center to an edge shifts
/// the scene by 19px horizontally on a Full HD frame. Larger values make the
/// depth effect obvious enough to become distracting.
pub const DEFAULT_PARALLAX_STRENGTH: f64 = 0.02;

/// Default maximum look-at tilt in degrees.
pub const DEFAULT_ROTATE_STRENGTH: f64 = 4.0;

/// Whether the camera follows the simulated cursor by default.
pub const DEFAULT_CAMERA_FOLLOW: bool = true;

// ============================================================================
// Logging
// ============================================================================

/// Default log verbosity: 0=off, 1=error, 2=warn, 3=info, 4=debug, 5=trace.
pub const DEFAULT_LOG_LEVEL: i32 = 3;
