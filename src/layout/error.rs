use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid region: {width}x{height} (both sides must be positive)")]
    InvalidRegion { width: f32, height: f32 },
    #[error("protected margin {margin} does not fit in region height {height}")]
    MarginTooLarge { margin: f32, height: f32 },
}
