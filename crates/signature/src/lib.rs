//! Signature pad - smoothed freehand ink capture and raster export
//!
//! This crate turns ordered pointer samples into a smooth ink path:
//! - [`buffer`] - Five-slot rolling window of raw samples
//! - [`smoothing`] - Midpoint Bézier smoother fed by the window
//! - [`path`] - Append-only stroke path with incremental bounds
//! - [`bounds`] - Axis-aligned bounds, including cubic extrema
//! - [`surface`] - Pixel surface the live view is drawn into
//! - [`render`] - Stroking, full export and cropped export
//! - [`events`] - Delegate and redraw collaborators
//! - [`pad`] - The surface controller tying it all together

pub mod bounds;
pub mod buffer;
pub mod constants;
pub mod events;
pub mod pad;
pub mod path;
pub mod render;
pub mod smoothing;
pub mod surface;
pub mod types;
pub mod validation;

pub use bounds::*;
pub use buffer::*;
pub use constants::*;
pub use events::*;
pub use pad::*;
pub use path::*;
pub use render::*;
pub use smoothing::*;
pub use surface::*;
pub use types::*;
pub use validation::*;

pub use signature_pad_config::SignatureConfig;
