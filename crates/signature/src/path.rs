//! Append-only stroke path with incremental bounds

use crate::bounds::Bounds;
use crate::types::Segment;

/// The accumulated ink geometry.
///
/// Segments are never mutated or removed once appended, only cleared all at
/// once. The bounding box is widened on every append so querying it is O(1).
#[derive(Debug, Clone, Default)]
pub struct StrokePath {
    segments: Vec<Segment>,
    bounds: Option<Bounds>,
    curve_count: usize,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment and return its own bounds
    pub fn append(&mut self, segment: impl Into<Segment>) -> Bounds {
        let segment = segment.into();
        let segment_bounds = segment.bounds();
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&segment_bounds),
            None => segment_bounds,
        });
        if segment.is_curve() {
            self.curve_count += 1;
        }
        self.segments.push(segment);
        segment_bounds
    }

    /// Remove every segment
    pub fn clear(&mut self) {
        self.segments.clear();
        self.bounds = None;
        self.curve_count = 0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Smallest rectangle enclosing all path geometry, `None` when empty
    #[inline]
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.bounds
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[inline]
    pub fn curve_count(&self) -> usize {
        self.curve_count
    }

    #[inline]
    pub fn dot_count(&self) -> usize {
        self.segments.len() - self.curve_count
    }
}

impl<'a> IntoIterator for &'a StrokePath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
