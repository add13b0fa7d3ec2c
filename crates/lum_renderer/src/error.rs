use lum_core::SceneError;
use thiserror::Error;

/// Errors that stop a render before or at dispatch.
///
/// None of these leave a partial image behind.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    InvalidScene(#[from] SceneError),

    #[error("path stack capacity {capacity} is below the required depth {required}")]
    StackCapacity { capacity: usize, required: usize },

    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("execution backend failed: {0}")]
    Backend(String),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
