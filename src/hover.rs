//! Hover detection with persisted onset tracking.
//!
//! A [`HoverDetector`] is the only stateful piece of the pipeline: it
//! remembers the frame at which the current hover run began. One detector
//! belongs to exactly one (element, render session) pair. A
//! [`HoverTracker`] holds the detectors of one render session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HITBOX_PADDING;
use crate::error::ConfigError;
use crate::target::{ElementId, GeometryProvider};
use crate::types::{ElementRect, Frame, HoverState, MousePosition};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Padding applied to elements that do not set their own.
    pub hitbox_padding: f64,
    /// Elements tracked from the first frame of a session.
    pub tracked: Vec<TrackedElement>,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            hitbox_padding: DEFAULT_HITBOX_PADDING,
            tracked: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedElement {
    pub id: ElementId,
    #[serde(default)]
    pub hitbox_padding: Option<f64>,
}

impl HoverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_padding(self.hitbox_padding)?;
        for element in &self.tracked {
            if let Some(padding) = element.hitbox_padding {
                validate_padding(padding)?;
            }
        }
        Ok(())
    }
}

fn validate_padding(padding: f64) -> Result<(), ConfigError> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidHitboxPadding(padding))
    }
}

/// Hover state machine for one element.
///
/// Transitions: not-hovering → hovering records the frame; hovering →
/// hovering keeps it; hovering → not-hovering (or unmeasured) clears it.
#[derive(Clone, Debug, Default)]
pub struct HoverDetector {
    hover_start_frame: Option<Frame>,
    last_frame: Option<Frame>,
}

impl HoverDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        frame: Frame,
        mouse: &MousePosition,
        rect: Option<ElementRect>,
        hitbox_padding: f64,
    ) -> HoverState {
        // A frame earlier than the last one starts a new pass over the timeline
        if self.last_frame.is_some_and(|last| frame < last) {
            log::debug!(
                "Hover detector rewound from frame {:?} to {}, resetting onset",
                self.last_frame,
                frame
            );
            self.reset();
        }
        self.last_frame = Some(frame);

        let Some(rect) = rect else {
            self.hover_start_frame = None;
            return HoverState::UNMEASURED;
        };

        let point = mouse.point();
        let is_hovered = rect.contains_padded(point, hitbox_padding);
        let distance = point.distance(rect.center());

        self.hover_start_frame = match (is_hovered, self.hover_start_frame) {
            (true, Some(start)) => Some(start),
            (true, None) => Some(frame),
            (false, _) => None,
        };

        HoverState {
            is_hovered,
            distance,
            hover_start_frame: self.hover_start_frame,
        }
    }

    pub fn hover_start_frame(&self) -> Option<Frame> {
        self.hover_start_frame
    }

    pub fn reset(&mut self) {
        self.hover_start_frame = None;
        self.last_frame = None;
    }
}

#[derive(Clone, Debug)]
struct TrackedHover {
    padding: f64,
    detector: HoverDetector,
    last_state: Option<HoverState>,
}

/// Hover detectors for every tracked element of one render session.
#[derive(Clone, Debug)]
pub struct HoverTracker {
    default_padding: f64,
    elements: BTreeMap<ElementId, TrackedHover>,
}

impl HoverTracker {
    pub fn new(config: &HoverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut tracker = Self {
            default_padding: config.hitbox_padding,
            elements: BTreeMap::new(),
        };
        for element in &config.tracked {
            tracker.track(element.id.clone(), element.hitbox_padding)?;
        }
        Ok(tracker)
    }

    /// Start tracking `id`. Re-tracking an element restarts its lifecycle.
    pub fn track(&mut self, id: ElementId, hitbox_padding: Option<f64>) -> Result<(), ConfigError> {
        let padding = match hitbox_padding {
            Some(padding) => {
                validate_padding(padding)?;
                padding
            }
            None => self.default_padding,
        };
        log::debug!("Tracking hover for '{}' (padding {}px)", id, padding);
        self.elements.insert(
            id,
            TrackedHover {
                padding,
                detector: HoverDetector::new(),
                last_state: None,
            },
        );
        Ok(())
    }

    /// Stop tracking `id`, discarding its onset state.
    pub fn untrack(&mut self, id: &ElementId) -> bool {
        self.elements.remove(id).is_some()
    }

    pub fn is_tracked(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn tracked(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.keys()
    }

    /// Advance every tracked element to `frame`.
    pub fn update_all(
        &mut self,
        frame: Frame,
        mouse: &MousePosition,
        geometry: &impl GeometryProvider,
    ) -> BTreeMap<ElementId, HoverState> {
        self.elements
            .iter_mut()
            .map(|(id, tracked)| {
                let state = tracked
                    .detector
                    .update(frame, mouse, geometry.rect(id), tracked.padding);
                tracked.last_state = Some(state);
                (id.clone(), state)
            })
            .collect()
    }

    /// State produced by the most recent update, if any.
    pub fn state(&self, id: &ElementId) -> Option<HoverState> {
        self.elements.get(id)?.last_state
    }

    /// Clear all onset state, keeping the tracked set.
    pub fn reset(&mut self) {
        for tracked in self.elements.values_mut() {
            tracked.detector.reset();
            tracked.last_state = None;
        }
    }

    /// Same tracked set with independent, empty state cells.
    pub fn fresh(&self) -> Self {
        let mut tracker = self.clone();
        tracker.reset();
        tracker
    }
}
