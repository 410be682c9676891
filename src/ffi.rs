//! C ABI for render hosts that link the static library.
//!
//! The host owns the frame clock: it creates one session per render pass,
//! pushes element geometry as layout changes, and pulls one
//! [`CFrameState`] per frame.

use std::ffi::{c_char, CStr};
use std::path::Path;

use crate::session::MotionSession;
use crate::target::{ElementId, GeometrySnapshot};
use crate::trace;
use crate::types::{CameraTransform, ElementRect, Frame, HoverState, MousePosition};

pub type ProgressCallback = extern "C" fn(percent: f32);

/// Opaque session handle handed to the host.
pub struct CursorMotionHandle {
    session: MotionSession,
    geometry: GeometrySnapshot,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CMousePosition {
    pub x: f64,
    pub y: f64,
    pub is_clicking: bool,
}

impl From<MousePosition> for CMousePosition {
    fn from(m: MousePosition) -> Self {
        Self {
            x: m.x,
            y: m.y,
            is_clicking: m.is_clicking,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CCameraTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl From<CameraTransform> for CCameraTransform {
    fn from(c: CameraTransform) -> Self {
        Self {
            translate_x: c.translate_x,
            translate_y: c.translate_y,
            rotate_x: c.rotate_x,
            rotate_y: c.rotate_y,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CFrameState {
    pub frame: i64,
    pub mouse: CMousePosition,
    pub camera: CCameraTransform,
    /// Number of tracked elements hovered at this frame.
    pub hovered_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CElementRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CHoverState {
    /// False if the element is not tracked or no frame was evaluated yet.
    pub is_valid: bool,
    pub is_hovered: bool,
    pub distance: f64,
    pub has_start_frame: bool,
    pub hover_start_frame: i64,
}

impl CHoverState {
    const INVALID: CHoverState = CHoverState {
        is_valid: false,
        is_hovered: false,
        distance: f64::INFINITY,
        has_start_frame: false,
        hover_start_frame: 0,
    };
}

impl From<HoverState> for CHoverState {
    fn from(h: HoverState) -> Self {
        Self {
            is_valid: true,
            is_hovered: h.is_hovered,
            distance: h.distance,
            has_start_frame: h.hover_start_frame.is_some(),
            hover_start_frame: h.hover_start_frame.unwrap_or(0),
        }
    }
}

/// Borrow a NUL-terminated UTF-8 string from the host.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

unsafe fn handle_mut<'a>(handle: *mut CursorMotionHandle) -> Option<&'a mut CursorMotionHandle> {
    handle.as_mut()
}

/// Create a session from a JSON configuration. Returns null if the
/// configuration is malformed or invalid.
///
/// The `log` max level is process-wide. A session may raise it to its own
/// `log_level` but never lowers it, so a quiet session created later does
/// not silence one that asked for more detail.
///
/// # Safety
/// `config_json` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_session_new(
    config_json: *const c_char,
) -> *mut CursorMotionHandle {
    let Some(json) = str_arg(config_json) else {
        log::error!("cursor_motion_session_new: config is null or not UTF-8");
        return std::ptr::null_mut();
    };

    match MotionSession::from_json(json) {
        Ok(session) => {
            if session.log_level() > log::max_level() {
                log::set_max_level(session.log_level());
            }
            Box::into_raw(Box::new(CursorMotionHandle {
                session,
                geometry: GeometrySnapshot::new(),
            }))
        }
        Err(e) => {
            log::error!("Rejected motion configuration: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `handle` must be null or a pointer returned by `cursor_motion_session_new`
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_session_free(handle: *mut CursorMotionHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Record the measured rectangle of an element.
///
/// # Safety
/// `handle` must be a live session handle and `element_id` a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_set_element_rect(
    handle: *mut CursorMotionHandle,
    element_id: *const c_char,
    rect: CElementRect,
) -> bool {
    let (Some(h), Some(id)) = (handle_mut(handle), str_arg(element_id)) else {
        return false;
    };
    h.geometry.set(
        ElementId::new(id),
        ElementRect::new(rect.left, rect.top, rect.right, rect.bottom),
    );
    true
}

/// Mark an element as unmeasured.
///
/// # Safety
/// Same requirements as `cursor_motion_set_element_rect`.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_clear_element_rect(
    handle: *mut CursorMotionHandle,
    element_id: *const c_char,
) -> bool {
    let (Some(h), Some(id)) = (handle_mut(handle), str_arg(element_id)) else {
        return false;
    };
    h.geometry.clear(&ElementId::new(id)).is_some()
}

/// Evaluate one frame. A null handle yields a zeroed state.
///
/// # Safety
/// `handle` must be null or a live session handle.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_evaluate(
    handle: *mut CursorMotionHandle,
    frame: i64,
) -> CFrameState {
    let Some(h) = handle_mut(handle) else {
        return CFrameState::default();
    };
    let output = h.session.evaluate(frame, &h.geometry);
    CFrameState {
        frame,
        mouse: output.mouse.into(),
        camera: output.camera.into(),
        hovered_count: output.hovers.values().filter(|s| s.is_hovered).count() as u32,
    }
}

/// Hover state of `element_id` as of the last evaluated frame.
///
/// # Safety
/// Same requirements as `cursor_motion_set_element_rect`.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_hover_state(
    handle: *mut CursorMotionHandle,
    element_id: *const c_char,
) -> CHoverState {
    let (Some(h), Some(id)) = (handle_mut(handle), str_arg(element_id)) else {
        return CHoverState::INVALID;
    };
    h.session
        .hover()
        .state(&ElementId::new(id))
        .map(CHoverState::from)
        .unwrap_or(CHoverState::INVALID)
}

/// Start a new pass: all hover runs are forgotten.
///
/// # Safety
/// `handle` must be null or a live session handle.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_reset(handle: *mut CursorMotionHandle) {
    if let Some(h) = handle_mut(handle) {
        h.session.reset();
    }
}

/// Write a CSV trace of `start..=end` without disturbing the session's hover
/// state. Returns 0 on success, -1 on invalid arguments, -2 if the export failed.
///
/// # Safety
/// `handle` must be a live session handle and `csv_path` a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn cursor_motion_export_trace(
    handle: *mut CursorMotionHandle,
    start: Frame,
    end: Frame,
    csv_path: *const c_char,
    progress_callback: Option<ProgressCallback>,
) -> i32 {
    let (Some(h), Some(path)) = (handle_mut(handle), str_arg(csv_path)) else {
        return -1;
    };

    let report = |percent: f32| {
        if let Some(cb) = progress_callback {
            cb(percent);
        }
    };

    let result = trace::record(&h.session, start, end, &h.geometry, report)
        .and_then(|samples| trace::export_csv(Path::new(path), &samples));

    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("Trace export failed: {}", e);
            -2
        }
    }
}
