//! Collaborators notified by the signature pad
//!
//! Both are optional. The pad works without either, in which case redraw
//! requests can still be polled with `SignaturePad::take_dirty_region`.

use crate::bounds::Bounds;

/// Observer for stroke lifecycle notifications.
///
/// Every method has a no-op default, so implementors only override the
/// notifications they care about.
pub trait SignatureDelegate {
    /// A pointer went down and a new stroke started
    fn started_drawing(&mut self) {}

    /// The pointer was released and the stroke finished
    fn finished_drawing(&mut self) {}
}

/// Area of the view that needs repainting, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirtyRegion {
    /// Repaint everything
    Full,
    /// Repaint only this rectangle
    Rect(Bounds),
}

impl DirtyRegion {
    /// Smallest region covering both
    pub fn merge(self, other: DirtyRegion) -> DirtyRegion {
        match (self, other) {
            (DirtyRegion::Rect(a), DirtyRegion::Rect(b)) => DirtyRegion::Rect(a.union(&b)),
            _ => DirtyRegion::Full,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, DirtyRegion::Full)
    }
}

/// Host hook asked to schedule a repaint ("set needs display")
pub trait Invalidate {
    fn invalidate(&mut self, region: DirtyRegion);
}

impl<F> Invalidate for F
where
    F: FnMut(DirtyRegion),
{
    fn invalidate(&mut self, region: DirtyRegion) {
        self(region)
    }
}
