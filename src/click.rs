use crate::timeline::Waypoint;
use crate::types::Frame;

/// True if any click-triggering waypoint's window `[frame, frame + duration)`
/// covers `frame`. Overlapping windows merge.
pub fn is_clicking(frame: Frame, waypoints: &[Waypoint], click_duration: i64) -> bool {
    waypoints
        .iter()
        .filter(|w| w.triggers_click)
        .any(|w| frame >= w.frame && frame < w.frame.saturating_add(click_duration))
}
