use thiserror::Error;

/// Reasons a scene is rejected before rendering starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("material index {index} out of range ({count} materials)")]
    MaterialOutOfRange { index: usize, count: usize },

    #[error("triangle {triangle} has a zero-length or non-finite normal")]
    DegenerateNormal { triangle: usize },

    #[error("sphere {sphere} has non-positive radius {radius}")]
    NonPositiveRadius { sphere: usize, radius: f32 },

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for scene validation.
pub type SceneResult<T> = Result<T, SceneError>;
