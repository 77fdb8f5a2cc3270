use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid stroke width: {0} (must be finite and > 0)")]
    InvalidStrokeWidth(f32),
    #[error("Invalid color: {0:?} (components must be in 0..=1)")]
    InvalidColor([f32; 4]),
    #[error("Invalid scale factor: {0} (must be finite and > 0)")]
    InvalidScale(f32),
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Check a stroke width
pub fn validate_stroke_width(width: f32) -> Result<f32, ValidationError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(ValidationError::InvalidStrokeWidth(width))
    }
}

/// Check that every component is within 0..=1
pub fn validate_color(color: [f32; 4]) -> Result<[f32; 4], ValidationError> {
    if color.iter().all(|c| (0.0..=1.0).contains(c)) {
        Ok(color)
    } else {
        Err(ValidationError::InvalidColor(color))
    }
}

/// Check a display scale factor
pub fn validate_scale(scale: f32) -> Result<f32, ValidationError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ValidationError::InvalidScale(scale))
    }
}

/// Convert a [0, 1] color to 8-bit straight RGBA
pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
