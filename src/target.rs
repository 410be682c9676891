//! Waypoint targets and their resolution to screen-space points.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ElementRect, Point, Vector2, Viewport};

/// Identity of an on-screen element whose geometry is measured by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId::new(id)
    }
}

/// Where a waypoint sends the cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Fixed screen-space point.
    Absolute(Point),
    /// Center of a host-measured element.
    Element(ElementId),
}

impl Target {
    pub fn point(x: f64, y: f64) -> Self {
        Target::Absolute(Point::new(x, y))
    }

    pub fn element(id: impl Into<String>) -> Self {
        Target::Element(ElementId::new(id))
    }
}

/// Read-only view of element geometry at one point in time.
///
/// `None` means the element exists but has not been laid out yet.
pub trait GeometryProvider {
    fn rect(&self, id: &ElementId) -> Option<ElementRect>;
}

impl<F> GeometryProvider for F
where
    F: Fn(&ElementId) -> Option<ElementRect>,
{
    fn rect(&self, id: &ElementId) -> Option<ElementRect> {
        self(id)
    }
}

/// Owned geometry snapshot, filled in by the host between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
    rects: HashMap<ElementId, ElementRect>,
}

impl GeometrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(mut self, id: impl Into<String>, rect: ElementRect) -> Self {
        self.set(ElementId::new(id), rect);
        self
    }

    pub fn set(&mut self, id: ElementId, rect: ElementRect) {
        self.rects.insert(id, rect);
    }

    /// Mark an element as unmeasured.
    pub fn clear(&mut self, id: &ElementId) -> Option<ElementRect> {
        self.rects.remove(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ElementRect)> {
        self.rects.iter()
    }
}

impl GeometryProvider for GeometrySnapshot {
    fn rect(&self, id: &ElementId) -> Option<ElementRect> {
        self.rects.get(id).copied()
    }
}

/// Resolve a target plus offset to a concrete point. Never fails: an
/// unmeasured element resolves to the bare viewport center (offset ignored).
pub fn resolve_to_point(
    target: &Target,
    offset: Vector2,
    geometry: &impl GeometryProvider,
    viewport: &Viewport,
) -> Point {
    match target {
        Target::Absolute(point) => point.offset(offset),
        Target::Element(id) => match geometry.rect(id) {
            Some(rect) => rect.center().offset(offset),
            None => {
                log::debug!("Element '{}' unmeasured, using viewport center", id);
                viewport.center()
            }
        },
    }
}
