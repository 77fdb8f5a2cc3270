//! Midpoint cubic Bézier smoother
//!
//! Every time the window fills, the fourth sample is replaced by the midpoint
//! of the third and fifth. The emitted curve ends on that midpoint and the next
//! curve starts there with the fifth sample as its first control point, so
//! consecutive curves share a tangent direction at their joint.

use tracing::trace;

use crate::buffer::PointBuffer;
use crate::types::CubicSegment;

/// Emit a curve if the window is full, then slide it.
///
/// Returns `None` while fewer than five samples are buffered.
pub fn smooth(buffer: &mut PointBuffer) -> Option<CubicSegment> {
    if !buffer.is_full() {
        return None;
    }

    let [p0, p1, p2, _, p4] = *buffer.slots();
    let p3 = (p2 + p4) * 0.5;
    let curve = CubicSegment::new(p0, p1, p2, p3);

    buffer.slide(p3, p4);

    trace!(
        "smooth: curve ({:.1}, {:.1}) -> ({:.1}, {:.1})",
        p0.x, p0.y, p3.x, p3.y
    );
    Some(curve)
}
