/// Number of slots in the smoothing window.
pub const WINDOW_SIZE: usize = 5;

/// Cursor value at which the smoother emits a curve.
pub const SMOOTHING_CURSOR: usize = WINDOW_SIZE - 1;

/// Horizontal half-length of the mark stamped for a tap.
pub const DOT_HALF_WIDTH: f32 = 1.0;

/// Extra margin (in logical units) added around dirty regions for anti-aliasing.
pub const AA_MARGIN: f32 = 1.0;
