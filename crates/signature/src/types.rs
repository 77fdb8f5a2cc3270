use glam::Vec2;
use serde::{Deserialize, Serialize};
use signature_pad_config::{BLACK, DEFAULT_STROKE_WIDTH, WHITE};

use crate::bounds::{cubic_bounds, Bounds};
use crate::constants::DOT_HALF_WIDTH;

/// A sample position in surface-local logical units
pub type Point = Vec2;

/// A cubic Bézier segment of the ink path
///
/// `P(t) = (1-t)³·start + 3(1-t)²t·ctrl1 + 3(1-t)t²·ctrl2 + t³·end` for t in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicSegment {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate the curve at t using de Casteljau's algorithm
    pub fn eval(&self, t: f32) -> Point {
        let ab = self.start.lerp(self.ctrl1, t);
        let bc = self.ctrl1.lerp(self.ctrl2, t);
        let cd = self.ctrl2.lerp(self.end, t);
        let abc = ab.lerp(bc, t);
        let bcd = bc.lerp(cd, t);
        abc.lerp(bcd, t)
    }
}

/// A short horizontal mark stamped when the pointer is released without moving
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSegment {
    pub center: Point,
}

impl DotSegment {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// Left end of the mark
    pub fn start(&self) -> Point {
        self.center - Vec2::new(DOT_HALF_WIDTH, 0.0)
    }

    /// Right end of the mark
    pub fn end(&self) -> Point {
        self.center + Vec2::new(DOT_HALF_WIDTH, 0.0)
    }
}

/// One atomic piece of the stroke path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Curve(CubicSegment),
    Dot(DotSegment),
}

impl Segment {
    /// Tight bounds of the geometry (curve extrema included)
    pub fn bounds(&self) -> Bounds {
        match self {
            Segment::Curve(curve) => cubic_bounds(curve),
            Segment::Dot(dot) => Bounds::from_points(dot.start(), dot.end()),
        }
    }

    /// Point on the segment at t in [0, 1]
    pub fn eval(&self, t: f32) -> Point {
        match self {
            Segment::Curve(curve) => curve.eval(t),
            Segment::Dot(dot) => dot.start().lerp(dot.end(), t),
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::Curve(_))
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Segment::Dot(_))
    }
}

impl From<CubicSegment> for Segment {
    fn from(curve: CubicSegment) -> Self {
        Segment::Curve(curve)
    }
}

impl From<DotSegment> for Segment {
    fn from(dot: DotSegment) -> Self {
        Segment::Dot(dot)
    }
}

/// Global ink style. There is one style per pad; it is applied to the whole
/// path at render time, so changing it restyles earlier segments too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line width in logical units
    pub width: f32,
    /// Ink color [r, g, b, a]
    pub color: [f32; 4],
    /// Surface background color [r, g, b, a]
    pub background: [f32; 4],
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color: BLACK,
            background: WHITE,
        }
    }
}

/// Identifier of the pointer (finger, pen, mouse) that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The pointer assumed by the id-less `pointer_*` calls
    pub const PRIMARY: PointerId = PointerId(0);
}

/// A pointer event delivered by the host windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { id: PointerId, position: Point },
    Move { id: PointerId, position: Point },
    Up { id: PointerId },
}

impl PointerEvent {
    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { id, .. } | PointerEvent::Move { id, .. } | PointerEvent::Up { id } => id,
        }
    }
}
