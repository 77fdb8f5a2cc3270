//! Signature pad surface controller
//!
//! This module connects:
//! - Pointer input (from the host windowing layer)
//! - The smoothing window and curve smoother
//! - The stroke path and its bounds
//! - Redraw requests and delegate notifications
//! - Rendering and export
//!
//! Everything runs on the caller's thread. Use [`SignaturePad::snapshot`] to
//! hand the current artwork to another thread for export.

mod input;
mod surface_ops;

use signature_pad_config::SignatureConfig;
use tracing::debug;

use crate::bounds::Bounds;
use crate::buffer::PointBuffer;
use crate::constants::AA_MARGIN;
use crate::events::{DirtyRegion, Invalidate, SignatureDelegate};
use crate::path::StrokePath;
use crate::render::RenderError;
use crate::surface::Canvas;
use crate::types::{PointerId, StrokeStyle};
use crate::validation::{validate_color, validate_scale, validate_stroke_width, ValidationError};

/// Whether a stroke is being captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// A session opened by `pointer` is active
    Capturing { pointer: PointerId },
}

/// Signature capture surface controller
///
/// Workflow:
/// 1. The host forwards `pointer_down`, `pointer_move`, `pointer_up`
/// 2. Samples fill the smoothing window; every full window becomes a curve
/// 3. Curves (and tap dots) are appended to the stroke path
/// 4. Redraw requests go to the `Invalidate` hook and the pending dirty region
/// 5. The host calls `draw_live` and blits the canvas, or exports an image
pub struct SignaturePad {
    /// Ink style applied to the whole path at render time
    pub(crate) style: StrokeStyle,
    /// Accumulated ink geometry
    pub(crate) path: StrokePath,
    /// Smoothing window for the session in progress
    pub(crate) buffer: PointBuffer,
    pub(crate) state: CaptureState,
    /// Scale used when (re)creating the surface
    pub(crate) scale: f32,
    /// Live view surface (None until attached)
    pub(crate) canvas: Option<Canvas>,
    /// Redraw requests not yet taken by the host
    pub(crate) pending_redraw: Option<DirtyRegion>,
    pub(crate) delegate: Option<Box<dyn SignatureDelegate>>,
    pub(crate) invalidator: Option<Box<dyn Invalidate>>,
}

impl std::fmt::Debug for SignaturePad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignaturePad")
            .field("style", &self.style)
            .field("segments", &self.path.len())
            .field("state", &self.state)
            .field("surface", &self.canvas.as_ref().map(|c| c.geometry()))
            .field("pending_redraw", &self.pending_redraw)
            .field("has_delegate", &self.delegate.is_some())
            .field("has_invalidator", &self.invalidator.is_some())
            .finish()
    }
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePad {
    /// Create a pad with the default style and no surface attached
    pub fn new() -> Self {
        Self {
            style: StrokeStyle::default(),
            path: StrokePath::new(),
            buffer: PointBuffer::new(),
            state: CaptureState::Idle,
            scale: 1.0,
            canvas: None,
            pending_redraw: None,
            delegate: None,
            invalidator: None,
        }
    }

    /// Create a pad with a surface of the given logical size at scale 1
    pub fn with_surface(width: u32, height: u32) -> Result<Self, RenderError> {
        let mut pad = Self::new();
        pad.attach_surface(width, height)?;
        Ok(pad)
    }

    /// Create a pad and its surface from a shared config
    pub fn from_config(config: &SignatureConfig) -> Result<Self, RenderError> {
        let mut pad = Self::new();
        pad.style = StrokeStyle {
            width: validate_stroke_width(config.stroke_width)?,
            color: validate_color(config.stroke_color)?,
            background: validate_color(config.background_color)?,
        };
        pad.scale = validate_scale(config.scale)?;
        pad.attach_surface(config.width, config.height)?;
        Ok(pad)
    }

    /// Get the current style
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn stroke_width(&self) -> f32 {
        self.style.width
    }

    pub fn stroke_color(&self) -> [f32; 4] {
        self.style.color
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.style.background
    }

    /// Set the ink width. Takes effect for the whole path on the next render.
    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), ValidationError> {
        self.style.width = validate_stroke_width(width)?;
        self.request_redraw(DirtyRegion::Full);
        Ok(())
    }

    /// Set the ink color. Takes effect for the whole path on the next render.
    pub fn set_stroke_color(&mut self, color: [f32; 4]) -> Result<(), ValidationError> {
        self.style.color = validate_color(color)?;
        self.request_redraw(DirtyRegion::Full);
        Ok(())
    }

    /// Set the surface background color
    pub fn set_background_color(&mut self, color: [f32; 4]) -> Result<(), ValidationError> {
        self.style.background = validate_color(color)?;
        self.request_redraw(DirtyRegion::Full);
        Ok(())
    }

    /// Register the stroke observer, replacing any previous one
    pub fn set_delegate(&mut self, delegate: impl SignatureDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Remove the stroke observer
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Register the host repaint hook, replacing any previous one
    pub fn set_invalidator(&mut self, invalidator: impl Invalidate + 'static) {
        self.invalidator = Some(Box::new(invalidator));
    }

    pub fn clear_invalidator(&mut self) {
        self.invalidator = None;
    }

    /// Get the stroke path
    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    /// Bounding box of everything drawn, None when nothing is
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.path.bounding_box()
    }

    /// True if anything has been drawn since the last clear
    pub fn contains_signature(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn capture_state(&self) -> CaptureState {
        self.state
    }

    /// Check if a stroke is currently being captured
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    /// Take the accumulated redraw region, clearing it
    pub fn take_dirty_region(&mut self) -> Option<DirtyRegion> {
        self.pending_redraw.take()
    }

    /// Check if a redraw has been requested since the last take
    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw.is_some()
    }

    /// Record a redraw request and forward it to the host hook
    pub(crate) fn request_redraw(&mut self, region: DirtyRegion) {
        self.pending_redraw = Some(match self.pending_redraw {
            Some(pending) => pending.merge(region),
            None => region,
        });
        if let Some(invalidator) = self.invalidator.as_mut() {
            invalidator.invalidate(region);
        }
        debug!("request_redraw: {:?}", region);
    }

    /// Region touched by ink covering `bounds`
    pub(crate) fn ink_region(&self, bounds: Bounds) -> DirtyRegion {
        DirtyRegion::Rect(bounds.inflate(self.style.width / 2.0 + AA_MARGIN))
    }
}
