//! Diagnostic traces: play a frame range through a forked session and dump
//! what the renderer would receive.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TraceError;
use crate::session::MotionSession;
use crate::target::{ElementId, GeometryProvider};
use crate::types::{CameraTransform, Frame, MousePosition};

/// Longest frame range a single trace may cover (about nine hours at 30fps).
pub const MAX_TRACE_FRAMES: i64 = 1_000_000;

/// Upper bound on the up-front sample allocation.
const PREALLOC_FRAMES: i64 = 4096;

#[derive(Clone, Debug, PartialEq)]
pub struct TraceSample {
    pub frame: Frame,
    pub mouse: MousePosition,
    pub camera: CameraTransform,
    /// Tracked elements hovered at this frame.
    pub hovered: Vec<ElementId>,
}

/// Evaluate `start..=end` on a fork of `session`, leaving its hover state untouched.
pub fn record(
    session: &MotionSession,
    start: Frame,
    end: Frame,
    geometry: &impl GeometryProvider,
    mut progress_callback: impl FnMut(f32),
) -> Result<Vec<TraceSample>, TraceError> {
    if end < start {
        return Err(TraceError::EmptyRange { start, end });
    }

    let count = end
        .checked_sub(start)
        .and_then(|d| d.checked_add(1))
        .filter(|&n| n <= MAX_TRACE_FRAMES)
        .ok_or(TraceError::RangeTooLarge {
            start,
            end,
            max: MAX_TRACE_FRAMES,
        })?;

    let mut session = session.fork();
    let total = count as f64;
    let mut samples = Vec::with_capacity(count.min(PREALLOC_FRAMES) as usize);
    progress_callback(0.0);

    for frame in start..=end {
        let output = session.evaluate(frame, geometry);
        samples.push(TraceSample {
            frame,
            mouse: output.mouse,
            camera: output.camera,
            hovered: output
                .hovers
                .into_iter()
                .filter(|(_, state)| state.is_hovered)
                .map(|(id, _)| id)
                .collect(),
        });

        if (frame - start) % 30 == 0 {
            progress_callback(((frame - start) as f64 / total) as f32);
        }
    }

    progress_callback(1.0);
    log::info!("Recorded trace of {} frames ({}..={})", samples.len(), start, end);
    Ok(samples)
}

pub fn export_csv(path: impl AsRef<Path>, samples: &[TraceSample]) -> Result<(), TraceError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writeln!(
        writer,
        "frame,x,y,is_clicking,translate_x,translate_y,rotate_x,rotate_y,hovered"
    )?;
    for s in samples {
        let hovered: Vec<Cow<'_, str>> = s
            .hovered
            .iter()
            .map(|id| quote(id.as_str(), &[';']))
            .collect();
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            s.frame,
            s.mouse.x,
            s.mouse.y,
            s.mouse.is_clicking,
            s.camera.translate_x,
            s.camera.translate_y,
            s.camera.rotate_x,
            s.camera.rotate_y,
            quote(&hovered.join(";"), &[',', '\n', '\r'])
        )?;
    }
    writer.flush()?;
    log::info!("Exported {} trace samples to {:?}", samples.len(), path.as_ref());
    Ok(())
}

/// Wrap `field` in double quotes when it contains a quote or any of
/// `specials`, doubling embedded quotes.
fn quote<'a>(field: &'a str, specials: &[char]) -> Cow<'a, str> {
    if field.contains('"') || field.contains(specials) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(feature = "trace-png")]
pub use preview::render_png;

#[cfg(feature = "trace-png")]
mod preview {
    use std::path::Path;

    use image::{Rgba, RgbaImage};

    use super::TraceSample;
    use crate::error::TraceError;
    use crate::target::GeometrySnapshot;
    use crate::types::{ElementRect, Viewport};

    /// Longest edge of the preview image in pixels.
    const PREVIEW_MAX_WIDTH: f64 = 960.0;

    const BACKGROUND: Rgba<u8> = Rgba([18, 18, 24, 255]);
    const ELEMENT: Rgba<u8> = Rgba([110, 110, 130, 255]);
    const PATH: Rgba<u8> = Rgba([80, 160, 255, 255]);
    const HOVERED: Rgba<u8> = Rgba([90, 220, 120, 255]);
    const CLICKING: Rgba<u8> = Rgba([255, 80, 80, 255]);

    /// Draw element outlines and the cursor path, scaled down to a preview.
    pub fn render_png(
        path: impl AsRef<Path>,
        samples: &[TraceSample],
        viewport: &Viewport,
        geometry: &GeometrySnapshot,
    ) -> Result<(), TraceError> {
        let scale = (PREVIEW_MAX_WIDTH / viewport.width).min(1.0);
        let width = (viewport.width * scale).ceil().max(1.0) as u32;
        let height = (viewport.height * scale).ceil().max(1.0) as u32;
        let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

        for (_, rect) in geometry.iter() {
            draw_outline(&mut img, rect, scale);
        }

        for sample in samples {
            let color = if sample.mouse.is_clicking {
                CLICKING
            } else if !sample.hovered.is_empty() {
                HOVERED
            } else {
                PATH
            };
            draw_dot(&mut img, sample.mouse.x * scale, sample.mouse.y * scale, color);
        }

        img.save(path.as_ref())?;
        log::info!("Rendered trace preview {}x{} to {:?}", width, height, path.as_ref());
        Ok(())
    }

    fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }

    fn draw_dot(img: &mut RgbaImage, x: f64, y: f64, color: Rgba<u8>) {
        let (cx, cy) = (x.round() as i64, y.round() as i64);
        for dy in -1..=1 {
            for dx in -1..=1 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }

    fn draw_outline(img: &mut RgbaImage, rect: &ElementRect, scale: f64) {
        let left = (rect.left * scale).round() as i64;
        let right = (rect.right * scale).round() as i64;
        let top = (rect.top * scale).round() as i64;
        let bottom = (rect.bottom * scale).round() as i64;
        for x in left..=right {
            put(img, x, top, ELEMENT);
            put(img, x, bottom, ELEMENT);
        }
        for y in top..=bottom {
            put(img, left, y, ELEMENT);
            put(img, right, y, ELEMENT);
        }
    }
}
