//! Waypoint timeline: which segment is active at a frame, and how far along it.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::ConfigError;
use crate::target::Target;
use crate::types::{Frame, Vector2};

/// A (frame, target) pair the cursor should reach.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Waypoint {
    pub frame: Frame,
    pub target: Target,
    #[serde(default)]
    pub offset: Vector2,
    #[serde(default)]
    pub triggers_click: bool,
    /// Curve used on the segment that ends at this waypoint.
    #[serde(default)]
    pub easing: Option<Easing>,
}

impl Waypoint {
    pub fn new(frame: Frame, target: Target) -> Self {
        Self {
            frame,
            target,
            offset: Vector2::ZERO,
            triggers_click: false,
            easing: None,
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Vector2::new(x, y);
        self
    }

    pub fn with_click(mut self) -> Self {
        self.triggers_click = true;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Active segment of the timeline at one frame.
#[derive(Clone, Copy, Debug)]
pub struct Segment<'a> {
    pub start: &'a Waypoint,
    pub end: &'a Waypoint,
    /// Linear progress through the segment in [0, 1].
    pub t: f64,
}

impl<'a> Segment<'a> {
    fn hold(waypoint: &'a Waypoint) -> Self {
        Self {
            start: waypoint,
            end: waypoint,
            t: 1.0,
        }
    }

    /// True when both ends share a frame and the segment snaps instantly.
    pub fn is_degenerate(&self) -> bool {
        self.start.frame == self.end.frame
    }

    /// Progress remapped by the end waypoint's easing.
    pub fn eased_t(&self) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        self.end.easing.unwrap_or_default().apply(self.t)
    }
}

/// Find the segment active at `frame`.
///
/// Returns `None` only for an empty timeline. Before the first waypoint the
/// cursor holds at the first; after the last it holds at the last. When
/// several consecutive waypoints share `frame`, the cursor lands on the last
/// of them.
pub fn resolve(frame: Frame, waypoints: &[Waypoint]) -> Option<Segment<'_>> {
    let first = waypoints.first()?;
    let last = waypoints.last()?;

    if waypoints.len() == 1 || frame < first.frame {
        return Some(Segment::hold(first));
    }
    if frame > last.frame {
        return Some(Segment::hold(last));
    }

    let Some(mut i) = waypoints
        .windows(2)
        .position(|pair| pair[0].frame <= frame && frame <= pair[1].frame)
    else {
        // Only reachable with unordered waypoints, which validation rejects.
        return Some(Segment::hold(last));
    };

    while i + 2 < waypoints.len()
        && waypoints[i + 1].frame == frame
        && waypoints[i + 2].frame == frame
    {
        i += 1;
    }

    let start = &waypoints[i];
    let end = &waypoints[i + 1];
    let t = if start.frame == end.frame {
        1.0
    } else {
        (frame - start.frame) as f64 / (end.frame - start.frame) as f64
    };

    Some(Segment { start, end, t })
}

/// Reject timelines that are not frame-ascending or carry non-finite coordinates.
pub fn validate(waypoints: &[Waypoint]) -> Result<(), ConfigError> {
    for (index, waypoint) in waypoints.iter().enumerate() {
        let finite_target = match &waypoint.target {
            Target::Absolute(point) => point.is_finite(),
            Target::Element(_) => true,
        };
        if !finite_target || !waypoint.offset.x.is_finite() || !waypoint.offset.y.is_finite() {
            return Err(ConfigError::NonFiniteWaypoint { index });
        }
    }

    for (index, pair) in waypoints.windows(2).enumerate() {
        if pair[1].frame < pair[0].frame {
            return Err(ConfigError::WaypointsOutOfOrder {
                index: index + 1,
                frame: pair[1].frame,
                previous: pair[0].frame,
            });
        }
    }

    Ok(())
}
