//! Axis-aligned bounds and tight cubic Bézier bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{CubicSegment, Point};

/// Axis-aligned rectangle given by its min and max corners.
/// A zero width or height is valid (a horizontal stroke has no height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounds of a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Bounds spanning two arbitrary corners
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Smallest bounds containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow the bounds to include `point`
    pub fn include(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow every side by `amount`
    pub fn inflate(&self, amount: f32) -> Bounds {
        Bounds {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Multiply both corners by `factor` (logical units to pixels)
    pub fn scale(&self, factor: f32) -> Bounds {
        Bounds {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Containment test with a tolerance on every side
    pub fn contains(&self, point: Point, tolerance: f32) -> bool {
        point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
    }
}

/// Real roots of `a·t² + b·t + c` in ascending order.
///
/// Solved in f64 with the cancellation-free form `q = -(b + sign(b)·√Δ) / 2`,
/// roots `q / a` and `c / q`. Degrades to the linear case only when `a` is
/// negligible next to `b`.
fn quadratic_roots(a: f64, b: f64, c: f64) -> ([f64; 2], usize) {
    let mut roots = [0.0; 2];
    if a.abs() <= f64::EPSILON * b.abs() {
        if b == 0.0 {
            return (roots, 0);
        }
        roots[0] = -c / b;
        return (roots, 1);
    }
    let delta = b * b - 4.0 * a * c;
    if delta < 0.0 {
        return (roots, 0);
    }
    let q = -0.5 * (b + b.signum() * delta.sqrt());
    if q == 0.0 {
        // b and c are both zero: double root at the origin
        return (roots, 1);
    }
    let (r0, r1) = (q / a, c / q);
    roots = [r0.min(r1), r0.max(r1)];
    (roots, 2)
}

/// Tight bounds of a cubic Bézier.
///
/// The extremes lie at the endpoints or where the derivative of an axis is
/// zero inside (0, 1). Per axis the derivative is
/// `3·(a·t² + b·t + c)` with
/// `a = -p0 + 3p1 - 3p2 + p3`, `b = 2(p0 - 2p1 + p2)`, `c = p1 - p0`.
/// Control points themselves never form a boundary.
pub fn cubic_bounds(curve: &CubicSegment) -> Bounds {
    let mut bounds = Bounds::from_points(curve.start, curve.end);

    let (p0, p1, p2, p3) = (
        curve.start.as_dvec2(),
        curve.ctrl1.as_dvec2(),
        curve.ctrl2.as_dvec2(),
        curve.end.as_dvec2(),
    );
    let a = -p0 + p1 * 3.0 - p2 * 3.0 + p3;
    let b = (p0 - p1 * 2.0 + p2) * 2.0;
    let c = p1 - p0;

    for axis in 0..2 {
        let (roots, count) = quadratic_roots(a[axis], b[axis], c[axis]);
        for &t in &roots[..count] {
            if t > 0.0 && t < 1.0 {
                bounds.include(curve.eval(t as f32));
            }
        }
    }

    bounds
}
