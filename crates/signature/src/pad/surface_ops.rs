//! Surface operations for the signature pad

use image::RgbaImage;
use tracing::{debug, info};

use crate::events::DirtyRegion;
use crate::render::{self, RenderError, RenderSnapshot};
use crate::surface::{Canvas, SurfaceGeometry};
use crate::validation::validate_scale;

use super::SignaturePad;

impl SignaturePad {
    /// Attach a live view surface of the given logical size, replacing any
    /// previous one. Pixel size is the logical size times the pad's scale.
    pub fn attach_surface(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let canvas = Canvas::new(width, height, self.scale)?;
        info!(
            "attach_surface: {}x{} pixels (scale {})",
            canvas.width(),
            canvas.height(),
            canvas.scale()
        );
        self.canvas = Some(canvas);
        self.request_redraw(DirtyRegion::Full);
        Ok(())
    }

    /// Resize the attached surface. The path is kept and redrawn at the new size.
    ///
    /// Fails with `NoSurface` when nothing is attached.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if self.canvas.is_none() {
            return Err(RenderError::NoSurface);
        }
        self.attach_surface(width, height)
    }

    /// Drop the surface. Exports fail with `NoSurface` until one is attached again.
    pub fn detach_surface(&mut self) {
        if self.canvas.take().is_some() {
            info!("detach_surface");
        }
    }

    /// Change the physical pixels per logical unit.
    ///
    /// An attached surface is recreated at its logical size; on error the
    /// pad keeps its previous scale and surface.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), RenderError> {
        let scale = validate_scale(scale)?;
        if let Some(canvas) = &self.canvas {
            let (width, height) = canvas.logical_size();
            let resized = Canvas::new(width, height, scale)?;
            self.canvas = Some(resized);
            self.request_redraw(DirtyRegion::Full);
        }
        self.scale = scale;
        debug!("set_scale: {}", scale);
        Ok(())
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Get the live view surface, if attached
    pub fn surface(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Geometry of the attached surface
    pub fn surface_geometry(&self) -> Option<SurfaceGeometry> {
        self.canvas.as_ref().map(Canvas::geometry)
    }

    /// Remove everything drawn and request a full redraw.
    ///
    /// A stroke in progress keeps capturing; its next curve lands on the
    /// empty path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.request_redraw(DirtyRegion::Full);
        debug!("clear");
    }

    /// Repaint the attached surface from the path
    pub fn draw_live(&mut self) -> Result<(), RenderError> {
        let canvas = self.canvas.as_mut().ok_or(RenderError::NoSurface)?;
        render::draw_live(canvas, &self.path, &self.style);
        Ok(())
    }

    /// Rasterize background and ink at the surface's pixel size
    pub fn export_full(&self) -> Result<RgbaImage, RenderError> {
        render::export_full(self.surface_geometry(), &self.path, &self.style)
    }

    /// Full export cropped to the bounding box of the ink
    pub fn export_cropped(&self) -> Result<RgbaImage, RenderError> {
        render::export_cropped(self.surface_geometry(), &self.path, &self.style)
    }

    /// Owned copy of the artwork for exporting on another thread
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            path: self.path.clone(),
            style: self.style,
            geometry: self.surface_geometry(),
        }
    }
}
