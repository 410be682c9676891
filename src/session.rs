//! Per-render-session pipeline: frame → mouse → {hover, camera}.

use std::collections::BTreeMap;

use crate::camera::ParallaxCamera;
use crate::config::MotionConfig;
use crate::controller::MouseController;
use crate::error::ConfigError;
use crate::hover::HoverTracker;
use crate::target::{ElementId, GeometryProvider};
use crate::types::{CameraTransform, Frame, HoverState, MousePosition, Viewport};

/// Everything the rendering collaborators need for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub frame: Frame,
    pub mouse: MousePosition,
    pub camera: CameraTransform,
    pub hovers: BTreeMap<ElementId, HoverState>,
}

/// One render session. Owns the hover onset state of its tracked elements;
/// never share a session between concurrent renders, `fork` it instead.
#[derive(Clone, Debug)]
pub struct MotionSession {
    mouse: MouseController,
    camera: ParallaxCamera,
    hover: HoverTracker,
    log_level: log::LevelFilter,
}

impl MotionSession {
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        let log_level = config.log_level_filter();
        let MotionConfig {
            mouse,
            parallax,
            hover,
            ..
        } = config;

        let session = Self {
            hover: HoverTracker::new(&hover)?,
            camera: ParallaxCamera::new(parallax)?,
            mouse: MouseController::new(mouse)?,
            log_level,
        };

        log::info!(
            "Motion session created: {} waypoints, {} tracked elements, viewport {}x{}",
            session.mouse.config().waypoints.len(),
            session.hover.tracked().count(),
            session.viewport().width,
            session.viewport().height
        );
        Ok(session)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(MotionConfig::from_json(json)?)
    }

    pub fn viewport(&self) -> Viewport {
        self.mouse.viewport()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
    }

    pub fn mouse(&self) -> &MouseController {
        &self.mouse
    }

    pub fn camera(&self) -> &ParallaxCamera {
        &self.camera
    }

    pub fn hover(&self) -> &HoverTracker {
        &self.hover
    }

    pub fn hover_mut(&mut self) -> &mut HoverTracker {
        &mut self.hover
    }

    /// Evaluate one frame, advancing hover onset state.
    pub fn evaluate(&mut self, frame: Frame, geometry: &impl GeometryProvider) -> FrameOutput {
        let mouse = self.mouse.compute(frame, geometry);
        let camera = self.camera.follow(&mouse, &self.viewport());
        let hovers = self.hover.update_all(frame, &mouse, geometry);

        log::trace!(
            "Frame #{}: cursor=({:.2}, {:.2}) clicking={} hovered={}",
            frame,
            mouse.x,
            mouse.y,
            mouse.is_clicking,
            hovers.values().filter(|h| h.is_hovered).count()
        );

        FrameOutput {
            frame,
            mouse,
            camera,
            hovers,
        }
    }

    /// Camera for `frame` without touching hover state.
    pub fn camera_at(&self, frame: Frame, geometry: &impl GeometryProvider) -> CameraTransform {
        let mouse = self.mouse.compute(frame, geometry);
        self.camera.follow(&mouse, &self.viewport())
    }

    /// Same configuration with independent hover state, for rendering another
    /// frame range concurrently.
    pub fn fork(&self) -> Self {
        Self {
            mouse: self.mouse.clone(),
            camera: self.camera,
            hover: self.hover.fresh(),
            log_level: self.log_level,
        }
    }

    /// End the current pass: all hover runs are forgotten.
    pub fn reset(&mut self) {
        self.hover.reset();
    }
}
