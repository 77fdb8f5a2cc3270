//! Rendering of the stroke path: live redraw, full export and cropped export

use image::RgbaImage;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, trace};

use crate::bounds::Bounds;
use crate::path::StrokePath;
use crate::surface::{pixmap_to_image, Canvas, SurfaceGeometry};
use crate::types::{Segment, StrokeStyle};
use crate::validation::{to_rgba8, ValidationError};

/// Errors that can occur while rendering or exporting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// No pixel surface is attached
    #[error("No surface attached")]
    NoSurface,
    /// Cropped export requested with nothing drawn
    #[error("Nothing to crop: the path is empty")]
    EmptyPath,
    /// The crop rectangle has no area once snapped to pixels
    #[error("Nothing to crop: crop region is {width}x{height}")]
    DegenerateCrop { width: u32, height: u32 },
    #[error("Invalid surface: {0}")]
    Validation(#[from] ValidationError),
}

/// Build a tiny-skia path from the segments. Each segment starts with its
/// own move, so segments from different sessions are never joined.
pub fn build_path(path: &StrokePath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for segment in path {
        match segment {
            Segment::Curve(curve) => {
                builder.move_to(curve.start.x, curve.start.y);
                builder.cubic_to(
                    curve.ctrl1.x,
                    curve.ctrl1.y,
                    curve.ctrl2.x,
                    curve.ctrl2.y,
                    curve.end.x,
                    curve.end.y,
                );
            }
            Segment::Dot(dot) => {
                let (start, end) = (dot.start(), dot.end());
                builder.move_to(start.x, start.y);
                builder.line_to(end.x, end.y);
            }
        }
    }
    builder.finish()
}

/// Paint the background, then stroke the whole path with the current style
pub fn paint(pixmap: &mut Pixmap, path: &StrokePath, style: &StrokeStyle, scale: f32) {
    let [r, g, b, a] = to_rgba8(style.background);
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    let Some(skia_path) = build_path(path) else {
        trace!("paint: nothing to stroke");
        return;
    };

    let mut ink = Paint::default();
    let [r, g, b, a] = to_rgba8(style.color);
    ink.set_color_rgba8(r, g, b, a);
    ink.anti_alias = true;

    let stroke = Stroke {
        width: style.width,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Miter,
        ..Stroke::default()
    };

    pixmap.stroke_path(
        &skia_path,
        &ink,
        &stroke,
        Transform::from_scale(scale, scale),
        None,
    );
    trace!("paint: stroked {} segments", path.len());
}

/// Redraw the live view
pub fn draw_live(canvas: &mut Canvas, path: &StrokePath, style: &StrokeStyle) {
    let scale = canvas.scale();
    paint(canvas.pixmap_mut(), path, style, scale);
}

/// Rasterize background and strokes at the surface's pixel size
pub fn export_full(
    geometry: Option<SurfaceGeometry>,
    path: &StrokePath,
    style: &StrokeStyle,
) -> Result<RgbaImage, RenderError> {
    let geometry = geometry.ok_or(RenderError::NoSurface)?;
    let mut pixmap = geometry.pixmap()?;
    paint(&mut pixmap, path, style, geometry.scale);
    debug!("export_full: {}x{}", geometry.width, geometry.height);
    pixmap_to_image(&pixmap)
}

/// Full export cropped to the path's bounding box
pub fn export_cropped(
    geometry: Option<SurfaceGeometry>,
    path: &StrokePath,
    style: &StrokeStyle,
) -> Result<RgbaImage, RenderError> {
    let full = export_full(geometry, path, style)?;
    let bounds = path.bounding_box().ok_or(RenderError::EmptyPath)?;
    let scale = geometry.map_or(1.0, |g| g.scale);
    crop_to_bounds(&full, &bounds, scale)
}

/// Pixel rectangle (x, y, width, height) covering `bounds` once scaled.
/// Edges are rounded outward and the result is clipped to the image.
pub fn crop_rect(bounds: &Bounds, scale: f32, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let scaled = bounds.scale(scale);
    let x0 = scaled.min.x.floor().clamp(0.0, width as f32) as u32;
    let y0 = scaled.min.y.floor().clamp(0.0, height as f32) as u32;
    let x1 = scaled.max.x.ceil().clamp(0.0, width as f32) as u32;
    let y1 = scaled.max.y.ceil().clamp(0.0, height as f32) as u32;
    (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
}

/// Crop an exported image to the pixels covered by `bounds`
pub fn crop_to_bounds(image: &RgbaImage, bounds: &Bounds, scale: f32) -> Result<RgbaImage, RenderError> {
    let (x, y, width, height) = crop_rect(bounds, scale, image.width(), image.height());
    if width == 0 || height == 0 {
        debug!("crop_to_bounds: degenerate region {}x{} at ({}, {})", width, height, x, y);
        return Err(RenderError::DegenerateCrop { width, height });
    }
    Ok(image::imageops::crop_imm(image, x, y, width, height).to_image())
}

/// Owned copy of everything needed to export, detached from the live pad.
///
/// The pad keeps appending while a snapshot renders elsewhere; the snapshot
/// only sees the segments that existed when it was taken.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub path: StrokePath,
    pub style: StrokeStyle,
    pub geometry: Option<SurfaceGeometry>,
}

impl RenderSnapshot {
    pub fn export_full(&self) -> Result<RgbaImage, RenderError> {
        export_full(self.geometry, &self.path, &self.style)
    }

    pub fn export_cropped(&self) -> Result<RgbaImage, RenderError> {
        export_cropped(self.geometry, &self.path, &self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CubicSegment, DotSegment};
    use glam::Vec2;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn horizontal(from: f32, to: f32, y: f32) -> CubicSegment {
        let step = (to - from) / 3.0;
        CubicSegment::new(
            Vec2::new(from, y),
            Vec2::new(from + step, y),
            Vec2::new(from + 2.0 * step, y),
            Vec2::new(to, y),
        )
    }

    fn geometry(width: u32, height: u32) -> Option<SurfaceGeometry> {
        Some(SurfaceGeometry::from_logical(width, height, 1.0).unwrap())
    }

    #[test]
    fn test_build_path_empty() {
        assert!(build_path(&StrokePath::new()).is_none());
    }

    #[test]
    fn test_export_without_surface() {
        let path = StrokePath::new();
        let style = StrokeStyle::default();
        assert_eq!(export_full(None, &path, &style), Err(RenderError::NoSurface));
        assert_eq!(export_cropped(None, &path, &style), Err(RenderError::NoSurface));
    }

    #[test]
    fn test_export_full_background_only() {
        let image = export_full(geometry(20, 10), &StrokePath::new(), &StrokeStyle::default()).unwrap();
        assert_eq!(image.dimensions(), (20, 10));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_export_full_draws_ink() {
        let mut path = StrokePath::new();
        path.append(horizontal(10.0, 50.0, 10.0));
        let style = StrokeStyle {
            width: 4.0,
            ..Default::default()
        };
        let image = export_full(geometry(60, 20), &path, &style).unwrap();
        // Row 9 spans y in [9, 10], fully inside the 4-wide stroke around y = 10
        assert_eq!(image.get_pixel(30, 9).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(30, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_export_cropped_empty_path() {
        let result = export_cropped(geometry(20, 10), &StrokePath::new(), &StrokeStyle::default());
        assert_eq!(result, Err(RenderError::EmptyPath));
    }

    #[test]
    fn test_export_cropped_dimensions() {
        let mut path = StrokePath::new();
        path.append(horizontal(10.0, 40.0, 20.5));
        let image = export_cropped(geometry(100, 50), &path, &StrokeStyle::default()).unwrap();
        // x in [10, 40] -> 30 pixels, y = 20.5 -> row 20 only
        assert_eq!(image.dimensions(), (30, 1));
    }

    #[test]
    fn test_export_cropped_degenerate() {
        let mut path = StrokePath::new();
        path.append(horizontal(10.0, 40.0, 20.0));
        let result = export_cropped(geometry(100, 50), &path, &StrokeStyle::default());
        assert_eq!(result, Err(RenderError::DegenerateCrop { width: 30, height: 0 }));
    }

    #[test]
    fn test_crop_rect_scaled_and_clipped() {
        let bounds = Bounds::from_points(Vec2::new(-5.0, 2.25), Vec2::new(30.5, 8.0));
        assert_eq!(crop_rect(&bounds, 1.0, 20, 20), (0, 2, 20, 6));
        assert_eq!(crop_rect(&bounds, 2.0, 100, 100), (0, 4, 61, 12));
    }

    #[test]
    fn test_dot_is_visible() {
        let mut path = StrokePath::new();
        path.append(DotSegment::new(Vec2::new(10.0, 10.0)));
        let style = StrokeStyle {
            width: 4.0,
            color: RED,
            ..Default::default()
        };
        let image = export_full(geometry(20, 20), &path, &style).unwrap();
        assert_eq!(image.get_pixel(10, 9).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_draw_live_matches_export() {
        let mut path = StrokePath::new();
        path.append(horizontal(2.0, 30.0, 7.0));
        path.append(horizontal(30.0, 35.0, 12.0));
        let style = StrokeStyle::default();

        let mut canvas = Canvas::new(40, 20, 1.0).unwrap();
        draw_live(&mut canvas, &path, &style);
        let exported = export_full(Some(canvas.geometry()), &path, &style).unwrap();
        assert_eq!(canvas.to_image().unwrap(), exported);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut path = StrokePath::new();
        path.append(horizontal(10.0, 40.0, 20.5));
        let snapshot = RenderSnapshot {
            path: path.clone(),
            style: StrokeStyle::default(),
            geometry: geometry(100, 50),
        };
        path.append(horizontal(40.0, 90.0, 40.5));

        let handle = std::thread::spawn(move || snapshot.export_cropped());
        let image = handle.join().unwrap().unwrap();
        assert_eq!(image.dimensions(), (30, 1));
    }
}
