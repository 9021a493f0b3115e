use crate::math::MathError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a conversion
///
/// All variants are detected before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "Sample data has {actual} values but a {width}x{height} frame needs {expected}"
    )]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Buffer of {actual} bytes is smaller than the required {expected} bytes")]
    BufferTooSmall { expected: usize, actual: usize },
    #[error("Pixel {x}x{y} is outside of the {width}x{height} frame")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("Unsupported combination: {0}")]
    UnsupportedCombination(String),
    #[error("Frame geometry: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn unsupported(err: impl std::fmt::Display) -> Self {
        Self::UnsupportedCombination(err.to_string())
    }
}
