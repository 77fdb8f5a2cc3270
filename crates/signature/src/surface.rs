//! Pixel surface the live signature view is drawn into

use tiny_skia::Pixmap;
use tracing::info;

use crate::render::RenderError;
use crate::validation::{to_rgba8, validate_scale, ValidationError};

/// Pixel dimensions and scale of a surface, without the pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    /// Physical pixels per logical unit
    pub scale: f32,
}

impl SurfaceGeometry {
    /// Geometry for a logical size at the given scale
    pub fn from_logical(width: u32, height: u32, scale: f32) -> Result<Self, ValidationError> {
        let scale = validate_scale(scale)?;
        let pixel_width = (width as f32 * scale).round() as u32;
        let pixel_height = (height as f32 * scale).round() as u32;
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ValidationError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width: pixel_width,
            height: pixel_height,
            scale,
        })
    }

    /// Allocate a pixmap of this size
    pub(crate) fn pixmap(&self) -> Result<Pixmap, RenderError> {
        Pixmap::new(self.width, self.height).ok_or(RenderError::NoSurface)
    }
}

/// An RGBA8 surface backed by a tiny-skia pixmap
/// Pixels are stored premultiplied, as tiny-skia requires
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
    /// Size requested by the host, in logical units
    logical: (u32, u32),
}

impl Canvas {
    /// Create a surface for a logical size at the given scale, initialized to transparent black
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self, RenderError> {
        let geometry = SurfaceGeometry::from_logical(width, height, scale)?;
        let pixmap = geometry.pixmap()?;
        info!(
            "Canvas::new: {}x{} logical at scale {} -> {}x{} pixels",
            width, height, scale, geometry.width, geometry.height
        );
        Ok(Self {
            pixmap,
            scale: geometry.scale,
            logical: (width, height),
        })
    }

    /// Width in physical pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in physical pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// (width, height) in logical units
    pub fn logical_size(&self) -> (u32, u32) {
        self.logical
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry {
            width: self.width(),
            height: self.height(),
            scale: self.scale,
        }
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = to_rgba8(color);
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Get a pixel as straight (non-premultiplied) RGBA
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Premultiplied RGBA bytes, row-major, for blitting by the host
    pub fn as_bytes(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copy the surface out as a straight-alpha image
    pub fn to_image(&self) -> Result<image::RgbaImage, RenderError> {
        pixmap_to_image(&self.pixmap)
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

/// Demultiply a pixmap into an `image::RgbaImage`
pub(crate) fn pixmap_to_image(pixmap: &Pixmap) -> Result<image::RgbaImage, RenderError> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(RenderError::NoSurface)
}
